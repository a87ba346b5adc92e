//! Default error messages and template rendering
//!
//! Templates use `%s` placeholders: the first is replaced with the field's
//! display name, the second with the rule parameter.

pub fn default_template(rule: &str) -> Option<&'static str> {
    let template = match rule {
        "required" => "The %s field is required.",
        "matches" => "The %s field does not match the %s field.",
        "default" => "The %s field is still set to default, please change.",
        "valid_email" => "The %s field must contain a valid email address.",
        "valid_emails" => "The %s field must contain all valid email addresses.",
        "min_length" => "The %s field must be at least %s characters in length.",
        "max_length" => "The %s field must not exceed %s characters in length.",
        "exact_length" => "The %s field must be exactly %s characters in length.",
        "greater_than" => "The %s field must contain a number greater than %s.",
        "less_than" => "The %s field must contain a number less than %s.",
        "alpha" => "The %s field must only contain alphabetical characters.",
        "alpha_numeric" => "The %s field must only contain alpha-numeric characters.",
        "alpha_dash" => {
            "The %s field must only contain alpha-numeric characters, underscores, and dashes."
        }
        "numeric" => "The %s field must contain only numbers.",
        "integer" => "The %s field must contain an integer.",
        "decimal" => "The %s field must contain a decimal number.",
        "is_natural" => "The %s field must contain only positive numbers.",
        "is_natural_no_zero" => "The %s field must contain a number greater than zero.",
        "valid_ip" => "The %s field must contain a valid IP.",
        "valid_base64" => "The %s field must contain a base64 string.",
        "valid_credit_card" => "The %s field must contain a valid credit card number.",
        "is_file_type" => "The %s field must contain only %s files.",
        "valid_url" => "The %s field must contain a valid URL.",
        "greater_than_date" => "The %s field must contain a more recent date than %s.",
        "less_than_date" => "The %s field must contain an older date than %s.",
        "greater_than_or_equal_date" => {
            "The %s field must contain a date that's at least as recent as %s."
        }
        "less_than_or_equal_date" => "The %s field must contain a date that's %s or older.",
        _ => return None,
    };
    Some(template)
}

/// Fills a template with the display name and, if given, the parameter
pub fn render(template: &str, display: &str, param: Option<&str>) -> String {
    let message = template.replacen("%s", display, 1);
    match param {
        Some(param) => message.replacen("%s", param, 1),
        None => message,
    }
}

/// Message used when no template exists for a failing rule
pub fn fallback(display: &str) -> String {
    format!("An error has occurred with the {} field.", display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_param() {
        let template = default_template("min_length").unwrap();
        assert_eq!(
            render(template, "Password", Some("8")),
            "The Password field must be at least 8 characters in length."
        );
    }

    #[test]
    fn test_render_without_param_leaves_second_placeholder() {
        assert_eq!(render("%s and %s", "Name", None), "Name and %s");
    }

    #[test]
    fn test_unknown_rule_has_no_template() {
        assert!(default_template("callback_unique").is_none());
        assert_eq!(fallback("Email"), "An error has occurred with the Email field.");
    }
}
