//! Foorm WASM
//!
//! Browser bindings for Foorm. Binds a [`FormValidator`] to a live form:
//! inserts error containers, listens for `change` on each field and `submit`
//! on the form, and cancels submission while the form is invalid.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { Foorm, initLogging } from './foorm_wasm.js';
//!
//! await init();
//! initLogging('debug');
//!
//! const form = new Foorm('signup', [
//!     { name: 'email', display: 'Email', rules: 'required|valid_email' },
//!     { name: 'password', rules: 'required|min_length[8]' },
//!     { name: 'confirm_password', display: 'Confirmation', rules: 'required|matches[password]' },
//! ]);
//! form.registerCallback('not_admin', (value) => value !== 'admin');
//! ```

pub mod logging;
pub mod web_document;

use std::cell::RefCell;
use std::rc::Rc;

use foorm::{FieldDescriptor, FieldRecord, FormConfig, FormSpec, FormValidator};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub use web_document::WebDocument;

type SharedValidator = Rc<RefCell<FormValidator<WebDocument>>>;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Sends log output at `level` and above to the browser console.
///
/// Returns false if logging was already initialized.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<bool, JsValue> {
    let level = logging::parse_level(level).map_err(to_js)?;
    Ok(logging::init(level))
}

/// An event listener registered on the page, removed again on drop
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Validator bound to one form on the page
#[wasm_bindgen]
pub struct Foorm {
    validator: SharedValidator,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl Foorm {
    /// Binds to the form with id `formId`.
    ///
    /// `fields` is an array of `{ name, display?, rules }`; `options` is an
    /// optional object with `errorIdPrefix`, `containerClass`, `messageClass`,
    /// `placeholder` and `messages`.
    #[wasm_bindgen(constructor)]
    pub fn new(form_id: &str, fields: JsValue, options: JsValue) -> Result<Foorm, JsValue> {
        let fields = parse_fields(fields).map_err(to_js)?;
        let config = parse_options(options).map_err(to_js)?;
        Self::bind(form_id, fields, config).map_err(to_js)
    }

    /// Binds using a JSON form specification:
    /// `{ "formId": "...", "fields": [...], "config": {...} }`
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Foorm, JsValue> {
        let spec = FormSpec::from_json(json).map_err(to_js)?;
        Self::bind(&spec.form_id, spec.fields, spec.config).map_err(to_js)
    }

    /// Validates all active fields and updates their messages
    pub fn validate(&self) -> bool {
        match self.validator.try_borrow_mut() {
            Ok(mut validator) => validator.validate(),
            Err(_) => {
                warn!("validate() called while a validation pass is running");
                false
            }
        }
    }

    /// Names of the activated fields, in activation order
    #[wasm_bindgen(js_name = activeFields)]
    pub fn active_fields(&self) -> Vec<String> {
        match self.validator.try_borrow() {
            Ok(validator) => validator.active_fields().as_slice().to_vec(),
            Err(_) => Vec::new(),
        }
    }

    /// Overrides a rule's message template (`rule` or `field.rule`)
    #[wasm_bindgen(js_name = setMessage)]
    pub fn set_message(&self, rule: &str, message: &str) {
        match self.validator.try_borrow_mut() {
            Ok(mut validator) => validator.engine_mut().set_message(rule, message),
            Err(_) => warn!(rule, "setMessage() ignored during a validation pass"),
        }
    }

    /// Registers `callback(value, param, field)` for `callback_<name>` rules.
    /// The rule fails only when the callback returns `false`.
    #[wasm_bindgen(js_name = registerCallback)]
    pub fn register_callback(&self, name: &str, callback: js_sys::Function) {
        let Ok(mut validator) = self.validator.try_borrow_mut() else {
            warn!(name, "registerCallback() ignored during a validation pass");
            return;
        };
        validator
            .engine_mut()
            .register_callback(name, move |value, param, field| {
                call_rule_callback(&callback, value, param, field)
            });
    }
}

impl Foorm {
    fn bind(form_id: &str, fields: Vec<FieldDescriptor>, config: FormConfig) -> anyhow::Result<Self> {
        let document = WebDocument::from_window()?;
        let validator: SharedValidator = Rc::new(RefCell::new(FormValidator::with_config(
            form_id, fields, document, config,
        )));

        let listeners = bind_events(&validator)
            .map_err(|err| anyhow::anyhow!("Failed to bind form events: {:?}", err))?;

        Ok(Self {
            validator,
            _listeners: listeners,
        })
    }
}

/// Forwards `change` on every bound field and `submit` on the form
fn bind_events(validator: &SharedValidator) -> Result<Vec<Listener>, JsValue> {
    let (form_id, bound, document) = {
        let validator = validator.borrow();
        (
            validator.form_id().to_string(),
            validator.bound_fields().to_vec(),
            validator.document().clone(),
        )
    };

    let mut listeners = Vec::with_capacity(bound.len() + 1);

    for field_id in bound {
        let Some(element) = document.element(&field_id) else {
            continue;
        };
        let shared = Rc::clone(validator);
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            match shared.try_borrow_mut() {
                Ok(mut validator) => {
                    validator.on_change(&field_id);
                }
                Err(_) => warn!(field = %field_id, "change ignored during a validation pass"),
            }
        });
        listeners.push(Listener::attach(element.into(), "change", closure)?);
    }

    match document.element(&form_id) {
        Some(form) => {
            let shared = Rc::clone(validator);
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                match shared.try_borrow_mut() {
                    Ok(mut validator) => {
                        if validator.on_submit().is_prevented() {
                            event.prevent_default();
                        }
                    }
                    Err(_) => warn!("submit ignored during a validation pass"),
                }
            });
            listeners.push(Listener::attach(form.into(), "submit", closure)?);
        }
        None => debug!(form = %form_id, "form element not found, submit is not guarded"),
    }

    Ok(listeners)
}

fn parse_fields(fields: JsValue) -> anyhow::Result<Vec<FieldDescriptor>> {
    serde_wasm_bindgen::from_value(fields)
        .map_err(|e| anyhow::anyhow!("Failed to parse fields: {}", e))
}

fn parse_options(options: JsValue) -> anyhow::Result<FormConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(FormConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow::anyhow!("Failed to parse options: {}", e))
}

fn call_rule_callback(
    callback: &js_sys::Function,
    value: &str,
    param: Option<&str>,
    field: &FieldRecord,
) -> bool {
    let param = param.map_or(JsValue::NULL, JsValue::from_str);
    let result = callback.call3(
        &JsValue::NULL,
        &JsValue::from_str(value),
        &param,
        &field_object(field),
    );

    match result {
        Ok(passed) => passed.as_bool() != Some(false),
        Err(err) => {
            warn!(field = %field.name, error = ?err, "rule callback threw");
            true
        }
    }
}

/// `{ name, display, rules, value }` for callbacks
fn field_object(field: &FieldRecord) -> JsValue {
    let object = js_sys::Object::new();
    for (key, value) in [
        ("name", &field.name),
        ("display", &field.display),
        ("rules", &field.rules),
        ("value", &field.value),
    ] {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    object.into()
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{EventInit, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn page() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount(html: &str) -> web_sys::Element {
        let document = page();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn fields(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    fn change(id: &str, value: &str) {
        let input: HtmlInputElement = page().get_element_by_id(id).unwrap().dyn_into().unwrap();
        input.set_value(value);
        input
            .dispatch_event(&Event::new("change").unwrap())
            .unwrap();
    }

    /// Dispatches a cancelable `submit` on the form, returning whether it was cancelled
    fn submit(form_id: &str) -> bool {
        let init = EventInit::new();
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();
        page()
            .get_element_by_id(form_id)
            .unwrap()
            .dispatch_event(&event)
            .unwrap();
        event.default_prevented()
    }

    fn message(container_id: &str) -> HtmlElement {
        page()
            .get_element_by_id(container_id)
            .unwrap()
            .first_element_child()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_change_shows_and_hides_error() {
        let root = mount(r#"<form id="f1"><input id="f1_email"></form>"#);
        let form = Foorm::new(
            "f1",
            fields(r#"[{"name": "f1_email", "display": "Email", "rules": "required|valid_email"}]"#),
            JsValue::UNDEFINED,
        )
        .unwrap();

        let container = page().get_element_by_id("field-error-f1_email").unwrap();
        assert_eq!(
            container.next_element_sibling().unwrap().id(),
            "f1_email"
        );
        assert_eq!(message("field-error-f1_email").style().get_property_value("display").unwrap(), "none");

        change("f1_email", "not-an-email");
        let shown = message("field-error-f1_email");
        assert_eq!(
            shown.inner_html(),
            "The Email field must contain a valid email address."
        );
        assert_ne!(shown.style().get_property_value("display").unwrap(), "none");
        assert_eq!(form.active_fields(), vec!["f1_email".to_string()]);

        change("f1_email", "a@b.com");
        assert!(form.validate());
        assert_eq!(message("field-error-f1_email").style().get_property_value("display").unwrap(), "none");

        drop(form);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_submit_is_cancelled_while_invalid() {
        let root = mount(r#"<form id="f4"><input id="f4_name"><input id="f4_email"></form>"#);
        let form = Foorm::new(
            "f4",
            fields(
                r#"[{"name": "f4_name", "display": "Name", "rules": "required"},
                    {"name": "f4_email", "display": "Email", "rules": "required|valid_email"}]"#,
            ),
            JsValue::UNDEFINED,
        )
        .unwrap();
        assert!(form.active_fields().is_empty());

        assert!(submit("f4"));
        assert_eq!(
            form.active_fields(),
            vec!["f4_name".to_string(), "f4_email".to_string()]
        );
        assert_eq!(message("field-error-f4_name").inner_html(), "The Name field is required.");

        for (id, value) in [("f4_name", "Ada"), ("f4_email", "ada@example.com")] {
            let input: HtmlInputElement = page().get_element_by_id(id).unwrap().dyn_into().unwrap();
            input.set_value(value);
        }
        assert!(!submit("f4"));
        assert_eq!(message("field-error-f4_name").style().get_property_value("display").unwrap(), "none");

        drop(form);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_element_is_skipped() {
        let root = mount(r#"<form id="f2"><input id="f2_name"></form>"#);
        let form = Foorm::new(
            "f2",
            fields(r#"[{"name": "f2_name", "rules": "required"}, {"name": "f2_ghost", "rules": "required"}]"#),
            JsValue::UNDEFINED,
        )
        .unwrap();

        assert!(page().get_element_by_id("field-error-f2_name").is_some());
        assert!(page().get_element_by_id("field-error-f2_ghost").is_none());
        assert!(form.validate());

        drop(form);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_invalid_fields_are_rejected() {
        let result = Foorm::new("f3", JsValue::from_str("nope"), JsValue::UNDEFINED);
        assert!(result.is_err());
    }
}
