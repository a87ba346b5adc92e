// File: foorm/src/descriptor.rs
// Purpose: Field descriptors and JSON form specifications

use anyhow::{Context, Result};
use foorm_rules::FieldRecord;
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;

/// Static configuration of one input, plus its last value read from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique name; must equal the input element's id
    pub name: String,

    /// Label used in error messages, defaults to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Rule string, e.g. `required|valid_email`
    #[serde(default)]
    pub rules: String,

    #[serde(default)]
    pub value: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: None,
            rules: rules.into(),
            value: String::new(),
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }

    /// Record handed to the rule engine
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord::new(self.name.as_str(), self.display_name(), self.rules.as_str())
            .with_value(self.value.as_str())
    }
}

/// A complete form definition as it can be embedded in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    pub form_id: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub config: FormConfig,
}

impl FormSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse form specification")
    }
}
