// File: foorm/src/error_state.rs
// Purpose: Which fields currently show an error, and with what message

use std::collections::BTreeMap;

/// Visible error messages keyed by field name.
///
/// Mirrors what the document shows: a field appears here iff it is active,
/// bound to an element, and its last validation failed. An unbound field can
/// still make a pass invalid without appearing here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    visible: BTreeMap<String, String>,
}

impl ErrorState {
    pub fn show(&mut self, name: &str, message: impl Into<String>) {
        self.visible.insert(name.to_string(), message.into());
    }

    pub fn hide(&mut self, name: &str) {
        self.visible.remove(name);
    }

    pub fn message(&self, name: &str) -> Option<&str> {
        self.visible.get(name).map(String::as_str)
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.contains_key(name)
    }

    /// `(field, message)` pairs sorted by field name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.visible
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
