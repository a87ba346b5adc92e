// File: foorm-rules/src/rule.rs
// Purpose: Rule-string parsing (`required|min_length[6]|callback_unique`)

use crate::patterns::RULE_REGEX;

/// Built-in rules understood by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Default,
    Matches,
    ValidEmail,
    ValidEmails,
    MinLength,
    MaxLength,
    ExactLength,
    GreaterThan,
    LessThan,
    Alpha,
    AlphaNumeric,
    AlphaDash,
    Numeric,
    Integer,
    Decimal,
    IsNatural,
    IsNaturalNoZero,
    ValidIp,
    ValidBase64,
    ValidCreditCard,
    IsFileType,
    ValidUrl,
    GreaterThanDate,
    LessThanDate,
    GreaterThanOrEqualDate,
    LessThanOrEqualDate,
}

impl Rule {
    pub fn from_name(name: &str) -> Option<Self> {
        let rule = match name {
            "required" => Rule::Required,
            "default" => Rule::Default,
            "matches" => Rule::Matches,
            "valid_email" => Rule::ValidEmail,
            "valid_emails" => Rule::ValidEmails,
            "min_length" => Rule::MinLength,
            "max_length" => Rule::MaxLength,
            "exact_length" => Rule::ExactLength,
            "greater_than" => Rule::GreaterThan,
            "less_than" => Rule::LessThan,
            "alpha" => Rule::Alpha,
            "alpha_numeric" => Rule::AlphaNumeric,
            "alpha_dash" => Rule::AlphaDash,
            "numeric" => Rule::Numeric,
            "integer" => Rule::Integer,
            "decimal" => Rule::Decimal,
            "is_natural" => Rule::IsNatural,
            "is_natural_no_zero" => Rule::IsNaturalNoZero,
            "valid_ip" => Rule::ValidIp,
            "valid_base64" => Rule::ValidBase64,
            "valid_credit_card" => Rule::ValidCreditCard,
            "is_file_type" => Rule::IsFileType,
            "valid_url" => Rule::ValidUrl,
            "greater_than_date" => Rule::GreaterThanDate,
            "less_than_date" => Rule::LessThanDate,
            "greater_than_or_equal_date" => Rule::GreaterThanOrEqualDate,
            "less_than_or_equal_date" => Rule::LessThanOrEqualDate,
            _ => return None,
        };
        Some(rule)
    }
}

/// One `|`-separated entry of a rule string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCall<'a> {
    /// Rule name with any `!` prefix and `[param]` suffix removed
    pub method: &'a str,
    pub param: Option<&'a str>,
    /// `!callback_...` entries run even when the value is empty
    pub forced: bool,
}

impl<'a> RuleCall<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let forced = raw.contains("!callback_");

        let (method, param) = match RULE_REGEX.captures(raw) {
            Some(caps) => {
                // Both groups always participate in a match
                let method = caps.get(1).map_or(raw, |m| m.as_str());
                let param = caps.get(2).map(|m| m.as_str());
                (method, param)
            }
            None => (raw, None),
        };

        Self {
            method: method.strip_prefix('!').unwrap_or(method),
            param,
            forced,
        }
    }

    /// Name of the registered callback this entry refers to, if any
    pub fn callback_name(&self) -> Option<&'a str> {
        self.method.strip_prefix("callback_")
    }
}

/// Splits a rule string into its entries, in declaration order
pub fn parse_rules(rules: &str) -> impl Iterator<Item = RuleCall<'_>> {
    rules.split('|').map(RuleCall::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_rule() {
        let call = RuleCall::parse("required");
        assert_eq!(call.method, "required");
        assert_eq!(call.param, None);
        assert!(!call.forced);
    }

    #[test]
    fn test_parse_rule_with_param() {
        let call = RuleCall::parse("matches[password]");
        assert_eq!(call.method, "matches");
        assert_eq!(call.param, Some("password"));
    }

    #[test]
    fn test_parse_forced_callback() {
        let call = RuleCall::parse("!callback_unique[users]");
        assert_eq!(call.method, "callback_unique");
        assert_eq!(call.param, Some("users"));
        assert!(call.forced);
        assert_eq!(call.callback_name(), Some("unique"));
    }

    #[test]
    fn test_parse_rules_keeps_order() {
        let methods: Vec<_> = parse_rules("required|valid_email|max_length[64]")
            .map(|c| c.method)
            .collect();
        assert_eq!(methods, vec!["required", "valid_email", "max_length"]);
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(Rule::from_name("valid_email"), Some(Rule::ValidEmail));
        assert_eq!(Rule::from_name("callback_x"), None);
        assert_eq!(Rule::from_name("bogus"), None);
    }
}
