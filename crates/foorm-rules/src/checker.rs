// File: foorm-rules/src/checker.rs
// Purpose: Field registry, per-field rule evaluation and error collection

use std::collections::HashMap;
use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::trace;

use crate::rule::{parse_rules, Rule};
use crate::{date, email, messages, numeric, string};

/// A field as the checker sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    /// Label used in messages
    pub display: String,
    pub rules: String,
    pub value: String,
}

impl FieldRecord {
    pub fn new(name: impl Into<String>, display: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            rules: rules.into(),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Custom rule: `(value, param, field) -> passed`
pub type Callback = Box<dyn Fn(&str, Option<&str>, &FieldRecord) -> bool>;

/// Rule engine holding the registered fields, message overrides, callbacks
/// and the error list of the last check
#[derive(Default)]
pub struct Checker {
    fields: Vec<FieldRecord>,
    errors: Vec<String>,
    messages: HashMap<String, String>,
    callbacks: HashMap<String, Callback>,
    today: Option<NaiveDate>,
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("fields", &self.fields)
            .field("errors", &self.errors)
            .field("messages", &self.messages)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Checker {
    pub fn new(fields: Vec<FieldRecord>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRecord> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Updates the stored value of a registered field; unknown names are ignored
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value.clear();
            field.value.push_str(value);
        }
    }

    /// Overrides the message of a rule, either for every field (`rule`) or
    /// for a single one (`field.rule`)
    pub fn set_message(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(rule.into(), template.into());
    }

    /// Registers a callback usable as `callback_<name>` in rule strings
    pub fn register_callback<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&str, Option<&str>, &FieldRecord) -> bool + 'static,
    {
        self.callbacks.insert(name.into(), Box::new(callback));
    }

    /// Fixes the date that `today` resolves to
    pub fn pin_today(&mut self, today: NaiveDate) {
        self.today = Some(today);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Runs every rule of `field`, appending one message per failing rule.
    ///
    /// Without `required` in the rule string an empty value skips all rules
    /// except forced callbacks.
    pub fn validate_field(&mut self, field: &FieldRecord) {
        let requires_value = field.rules.contains("required");
        let is_empty = field.value.is_empty();

        for call in parse_rules(&field.rules) {
            if !requires_value && !call.forced && is_empty {
                continue;
            }

            let (message_key, passed) = match Rule::from_name(call.method) {
                Some(rule) => (call.method, self.check(rule, field, call.param)),
                None => match call.callback_name() {
                    Some(name) => {
                        let passed = self
                            .callbacks
                            .get(name)
                            .map_or(true, |callback| callback(&field.value, call.param, field));
                        (name, passed)
                    }
                    None => {
                        trace!(rule = call.method, field = %field.name, "ignoring unknown rule");
                        continue;
                    }
                },
            };

            trace!(rule = call.method, field = %field.name, passed, "rule checked");
            if !passed {
                let message = self.message_for(field, message_key, call.param);
                self.errors.push(message);
            }
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn check(&self, rule: Rule, field: &FieldRecord, param: Option<&str>) -> bool {
        let value = field.value.as_str();

        match rule {
            Rule::Required => !value.is_empty(),
            Rule::Default => param != Some(value),
            Rule::Matches => with_param(param, |other| {
                self.field(other)
                    .is_some_and(|other| other.value == field.value)
            }),
            Rule::ValidEmail => email::is_valid_email(value),
            Rule::ValidEmails => email::are_valid_emails(value),
            Rule::MinLength => with_param(param, |p| string::min_length(value, p)),
            Rule::MaxLength => with_param(param, |p| string::max_length(value, p)),
            Rule::ExactLength => with_param(param, |p| string::exact_length(value, p)),
            Rule::GreaterThan => with_param(param, |p| numeric::greater_than(value, p)),
            Rule::LessThan => with_param(param, |p| numeric::less_than(value, p)),
            Rule::Alpha => string::is_alpha(value),
            Rule::AlphaNumeric => string::is_alpha_numeric(value),
            Rule::AlphaDash => string::is_alpha_dash(value),
            Rule::Numeric => numeric::is_numeric(value),
            Rule::Integer => numeric::is_integer(value),
            Rule::Decimal => numeric::is_decimal(value),
            Rule::IsNatural => numeric::is_natural(value),
            Rule::IsNaturalNoZero => numeric::is_natural_no_zero(value),
            Rule::ValidIp => string::is_valid_ip(value),
            Rule::ValidBase64 => string::is_valid_base64(value),
            Rule::ValidCreditCard => numeric::is_valid_credit_card(value),
            // Records carry no input type, and the check only applies to file inputs
            Rule::IsFileType => true,
            Rule::ValidUrl => string::is_valid_url(value),
            Rule::GreaterThanDate => {
                with_param(param, |p| date::greater_than_date(value, p, self.today()))
            }
            Rule::LessThanDate => with_param(param, |p| date::less_than_date(value, p, self.today())),
            Rule::GreaterThanOrEqualDate => {
                with_param(param, |p| date::greater_than_or_equal_date(value, p, self.today()))
            }
            Rule::LessThanOrEqualDate => {
                with_param(param, |p| date::less_than_or_equal_date(value, p, self.today()))
            }
        }
    }

    fn message_for(&self, field: &FieldRecord, key: &str, param: Option<&str>) -> String {
        let template = self
            .messages
            .get(&format!("{}.{}", field.name, key))
            .or_else(|| self.messages.get(key))
            .map(String::as_str)
            .or_else(|| messages::default_template(key));

        match template {
            Some(template) => {
                // A parameter naming a registered field is shown by its label
                let param = param.map(|p| self.field(p).map_or(p, |f| f.display.as_str()));
                messages::render(template, &field.display, param)
            }
            None => messages::fallback(&field.display),
        }
    }
}

/// Rules taking a parameter fail when it is missing
fn with_param(param: Option<&str>, check: impl FnOnce(&str) -> bool) -> bool {
    param.is_some_and(check)
}
