// File: foorm/src/config.rs
// Purpose: Error-container markup and message overrides

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::ErrorContainer;

/// Form-level options. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Id prefix of the error container inserted before each field
    #[serde(default = "default_error_id_prefix")]
    pub error_id_prefix: String,

    #[serde(default = "default_container_class")]
    pub container_class: String,

    #[serde(default = "default_message_class")]
    pub message_class: String,

    /// Initial (hidden) text of each message element
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Message templates keyed by `rule` or `field.rule`
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            error_id_prefix: default_error_id_prefix(),
            container_class: default_container_class(),
            message_class: default_message_class(),
            placeholder: default_placeholder(),
            messages: HashMap::new(),
        }
    }
}

impl FormConfig {
    /// Id of the error container for `field`, e.g. `field-error-email`
    pub fn error_id(&self, field: &str) -> String {
        format!("{}{}", self.error_id_prefix, field)
    }

    pub fn error_container(&self, field: &str) -> ErrorContainer {
        ErrorContainer {
            id: self.error_id(field),
            container_class: self.container_class.clone(),
            message_class: self.message_class.clone(),
            placeholder: self.placeholder.clone(),
        }
    }
}

// Default values
fn default_error_id_prefix() -> String {
    "field-error-".to_string()
}

fn default_container_class() -> String {
    "field-error".to_string()
}

fn default_message_class() -> String {
    "field-error-message".to_string()
}

fn default_placeholder() -> String {
    "Message".to_string()
}
