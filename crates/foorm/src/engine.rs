// File: foorm/src/engine.rs
// Purpose: Seam between the form validator and the rule-evaluation engine

use foorm_rules::{Checker, FieldRecord};

/// A rule engine the validator can drive one field at a time.
///
/// The engine keeps its own copy of every field so that rules referring to
/// other fields (`matches[password]`) see current values; the validator
/// refreshes those copies before each pass.
pub trait RuleEngine {
    /// Updates the engine's copy of a field's value
    fn update_value(&mut self, name: &str, value: &str);

    /// Empties the transient error list
    fn clear_errors(&mut self);

    /// Checks one field, appending a message for each failure
    fn validate_field(&mut self, field: &FieldRecord);

    /// Messages reported since the last `clear_errors`
    fn errors(&self) -> &[String];

    /// Overrides the message template of a rule (`rule` or `field.rule`)
    fn set_message(&mut self, rule: &str, template: &str);
}

impl RuleEngine for Checker {
    fn update_value(&mut self, name: &str, value: &str) {
        self.set_value(name, value);
    }

    fn clear_errors(&mut self) {
        Checker::clear_errors(self);
    }

    fn validate_field(&mut self, field: &FieldRecord) {
        Checker::validate_field(self, field);
    }

    fn errors(&self) -> &[String] {
        Checker::errors(self)
    }

    fn set_message(&mut self, rule: &str, template: &str) {
        Checker::set_message(self, rule, template);
    }
}
