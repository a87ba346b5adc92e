// File: foorm/src/document/memory.rs
// Purpose: In-memory document for headless use and tests

use super::{Document, ErrorContainer};

/// Error container as stored by [`MemoryDocument`]
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryErrorNode {
    pub id: String,
    pub container_class: String,
    pub message_class: String,
    pub message: String,
    pub visible: bool,
    /// `top` style of the message element, unset until first shown
    pub top: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Field { id: String, value: String },
    Error(MemoryErrorNode),
}

impl Node {
    fn id(&self) -> &str {
        match self {
            Node::Field { id, .. } => id,
            Node::Error(error) => &error.id,
        }
    }
}

/// A flat list of elements in document order.
///
/// Message heights are simulated as one `line_height` per line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    line_height: f64,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            line_height: 18.0,
        }
    }

    pub fn with_field(mut self, id: &str, value: &str) -> Self {
        self.add_field(id, value);
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Appends an input element
    pub fn add_field(&mut self, id: &str, value: &str) {
        self.nodes.push(Node::Field {
            id: id.to_string(),
            value: value.to_string(),
        });
    }

    /// Sets an input's value as if the user typed it; unknown ids are ignored
    pub fn set_value(&mut self, id: &str, value: &str) {
        for node in &mut self.nodes {
            if let Node::Field { id: field_id, value: current } = node {
                if field_id == id {
                    *current = value.to_string();
                }
            }
        }
    }

    pub fn error(&self, container_id: &str) -> Option<&MemoryErrorNode> {
        self.nodes.iter().find_map(|node| match node {
            Node::Error(error) if error.id == container_id => Some(error),
            _ => None,
        })
    }

    /// Ids of all elements, in document order
    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    fn error_mut(&mut self, container_id: &str) -> Option<&mut MemoryErrorNode> {
        self.nodes.iter_mut().find_map(|node| match node {
            Node::Error(error) if error.id == container_id => Some(error),
            _ => None,
        })
    }
}

impl Document for MemoryDocument {
    fn resolve(&self, selector: &str) -> Vec<String> {
        let wanted: Vec<&str> = selector
            .split(',')
            .filter_map(|part| part.trim().strip_prefix('#'))
            .collect();

        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Field { id, .. } if wanted.contains(&id.as_str()) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    fn value(&self, id: &str) -> Option<String> {
        self.nodes.iter().find_map(|node| match node {
            Node::Field { id: field_id, value } if field_id == id => Some(value.clone()),
            _ => None,
        })
    }

    fn insert_error_container(&mut self, field_id: &str, container: &ErrorContainer) {
        let Some(position) = self.nodes.iter().position(|node| node.id() == field_id) else {
            return;
        };
        self.nodes.insert(
            position,
            Node::Error(MemoryErrorNode {
                id: container.id.clone(),
                container_class: container.container_class.clone(),
                message_class: container.message_class.clone(),
                message: container.placeholder.clone(),
                visible: false,
                top: None,
            }),
        );
    }

    fn set_error_message(&mut self, container_id: &str, message: &str) {
        if let Some(error) = self.error_mut(container_id) {
            error.message = message.to_string();
        }
    }

    fn error_message_height(&self, container_id: &str) -> f64 {
        match self.error(container_id) {
            Some(error) if !error.message.is_empty() => {
                error.message.lines().count() as f64 * self.line_height
            }
            _ => 0.0,
        }
    }

    fn set_error_offset(&mut self, container_id: &str, top: f64) {
        if let Some(error) = self.error_mut(container_id) {
            error.top = Some(top);
        }
    }

    fn set_error_visible(&mut self, container_id: &str, visible: bool) {
        if let Some(error) = self.error_mut(container_id) {
            error.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn container(id: &str) -> ErrorContainer {
        ErrorContainer {
            id: id.to_string(),
            container_class: "field-error".to_string(),
            message_class: "field-error-message".to_string(),
            placeholder: "Message".to_string(),
        }
    }

    #[test]
    fn test_resolve_returns_document_order() {
        let doc = MemoryDocument::new()
            .with_field("b", "")
            .with_field("a", "");
        assert_eq!(doc.resolve("#a,#b,#missing"), vec!["b", "a"]);
    }

    #[test]
    fn test_container_goes_before_field() {
        let mut doc = MemoryDocument::new()
            .with_field("name", "")
            .with_field("email", "");
        doc.insert_error_container("email", &container("field-error-email"));

        assert_eq!(doc.ids(), vec!["name", "field-error-email", "email"]);
        let error = doc.error("field-error-email").unwrap();
        assert!(!error.visible);
        assert_eq!(error.message, "Message");
    }

    #[test]
    fn test_insert_before_missing_field_is_noop() {
        let mut doc = MemoryDocument::new().with_field("name", "");
        doc.insert_error_container("ghost", &container("field-error-ghost"));
        assert_eq!(doc.ids(), vec!["name"]);
    }

    #[test]
    fn test_simulated_height() {
        let mut doc = MemoryDocument::new()
            .with_line_height(10.0)
            .with_field("name", "");
        doc.insert_error_container("name", &container("e"));

        doc.set_error_message("e", "one\ntwo");
        assert_eq!(doc.error_message_height("e"), 20.0);

        doc.set_error_message("e", "");
        assert_eq!(doc.error_message_height("e"), 0.0);
    }

    #[test]
    fn test_value_reads() {
        let mut doc = MemoryDocument::new().with_field("name", "Ada");
        assert_eq!(doc.value("name").as_deref(), Some("Ada"));
        doc.set_value("name", "Grace");
        assert_eq!(doc.value("name").as_deref(), Some("Grace"));
        assert_eq!(doc.value("missing"), None);
    }
}
