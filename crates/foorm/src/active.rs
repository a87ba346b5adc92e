// File: foorm/src/active.rs
// Purpose: Ordered, duplicate-free set of activated field names

/// Fields the user has interacted with, in activation order.
///
/// Grows only; a name is never removed once added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFieldSet {
    names: Vec<String>,
}

impl ActiveFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless already present. Returns true if it was added.
    pub fn activate(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
