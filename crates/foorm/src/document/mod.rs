//! DOM access used by the form validator
//!
//! The validator never touches a browser API directly. It resolves fields,
//! reads values and drives the error containers through [`Document`].

mod memory;

pub use memory::{MemoryDocument, MemoryErrorNode};

/// The document layer the validator runs against
pub trait Document {
    /// Ids of the elements matched by a `#a,#b` selector, in document order.
    /// Names without a matching element are simply absent.
    fn resolve(&self, selector: &str) -> Vec<String>;

    /// Current value of the element with `id`, if it exists
    fn value(&self, id: &str) -> Option<String>;

    /// Inserts `container` immediately before the element with `field_id`
    fn insert_error_container(&mut self, field_id: &str, container: &ErrorContainer);

    /// Replaces the content of a container's message element
    fn set_error_message(&mut self, container_id: &str, message: &str);

    /// Rendered outer height of the message element, margins included
    fn error_message_height(&self, container_id: &str) -> f64;

    /// Sets the `top` offset of the message element, in pixels
    fn set_error_offset(&mut self, container_id: &str, top: f64);

    fn set_error_visible(&mut self, container_id: &str, visible: bool);
}

/// Markup of the error container placed before each field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContainer {
    pub id: String,
    pub container_class: String,
    pub message_class: String,
    pub placeholder: String,
}

impl ErrorContainer {
    /// Container with a hidden message child
    pub fn to_html(&self) -> String {
        format!(
            r#"<div id="{}" class="{}"><div class="{}" style="display: none">{}</div></div>"#,
            escape_attr(&self.id),
            escape_attr(&self.container_class),
            escape_attr(&self.message_class),
            escape_text(&self.placeholder),
        )
    }
}

/// Builds the `#a,#b,...` selector for a list of ids
pub fn id_selector<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_selector() {
        assert_eq!(id_selector(["email", "password"]), "#email,#password");
        assert_eq!(id_selector([]), "");
    }

    #[test]
    fn test_container_html() {
        let container = ErrorContainer {
            id: "field-error-email".to_string(),
            container_class: "field-error".to_string(),
            message_class: "field-error-message".to_string(),
            placeholder: "Message".to_string(),
        };
        assert_eq!(
            container.to_html(),
            r#"<div id="field-error-email" class="field-error"><div class="field-error-message" style="display: none">Message</div></div>"#
        );
    }

    #[test]
    fn test_container_html_escapes() {
        let container = ErrorContainer {
            id: r#"a"b"#.to_string(),
            container_class: "c".to_string(),
            message_class: "m".to_string(),
            placeholder: "<b>".to_string(),
        };
        let html = container.to_html();
        assert!(html.contains(r#"id="a&quot;b""#));
        assert!(html.contains("&lt;b&gt;"));
    }
}
