// File: foorm-wasm/src/web_document.rs
// Purpose: Document implementation over the browser DOM

use foorm::{Document, ErrorContainer};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// The page the validator is bound to
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn from_window() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("No global window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("Window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// The message element inside an error container
    fn message_element(&self, container_id: &str) -> Option<HtmlElement> {
        self.element(container_id)?
            .first_element_child()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn vertical_margins(&self, element: &Element) -> f64 {
        let Ok(Some(style)) = self.window.get_computed_style(element) else {
            return 0.0;
        };
        ["margin-top", "margin-bottom"]
            .iter()
            .filter_map(|property| style.get_property_value(property).ok())
            .filter_map(|value| value.trim_end_matches("px").trim().parse::<f64>().ok())
            .sum()
    }
}

impl Document for WebDocument {
    fn resolve(&self, selector: &str) -> Vec<String> {
        if selector.is_empty() {
            return Vec::new();
        }
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(%selector, error = ?err, "invalid field selector");
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| element.id())
            .collect()
    }

    fn value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some(textarea.value())
        } else {
            None
        }
    }

    fn insert_error_container(&mut self, field_id: &str, container: &ErrorContainer) {
        let Some(field) = self.element(field_id) else {
            return;
        };
        if let Err(err) = field.insert_adjacent_html("beforebegin", &container.to_html()) {
            warn!(field = field_id, error = ?err, "failed to insert error container");
        }
    }

    fn set_error_message(&mut self, container_id: &str, message: &str) {
        if let Some(element) = self.message_element(container_id) {
            element.set_inner_html(message);
        }
    }

    fn error_message_height(&self, container_id: &str) -> f64 {
        let Some(element) = self.message_element(container_id) else {
            return 0.0;
        };

        // Hidden elements have no layout; show it invisibly while measuring
        let style = element.style();
        let display = style.get_property_value("display").unwrap_or_default();
        let visibility = style.get_property_value("visibility").unwrap_or_default();
        let hidden = display == "none";
        if hidden {
            let _ = style.set_property("visibility", "hidden");
            let _ = style.set_property("display", "block");
        }

        let height = f64::from(element.offset_height()) + self.vertical_margins(&element);

        if hidden {
            let _ = style.set_property("display", &display);
            restore(&style, "visibility", &visibility);
        }
        height
    }

    fn set_error_offset(&mut self, container_id: &str, top: f64) {
        if let Some(element) = self.message_element(container_id) {
            if let Err(err) = element.style().set_property("top", &format!("{}px", top)) {
                warn!(container = container_id, error = ?err, "failed to position error");
            }
        }
    }

    fn set_error_visible(&mut self, container_id: &str, visible: bool) {
        let Some(element) = self.message_element(container_id) else {
            return;
        };
        let style = element.style();
        let result: Result<(), JsValue> = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if let Err(err) = result {
            warn!(container = container_id, error = ?err, "failed to toggle error");
        }
    }
}

fn restore(style: &web_sys::CssStyleDeclaration, property: &str, value: &str) {
    let _ = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
}
