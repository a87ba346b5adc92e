// File: foorm/src/validator.rs
// Purpose: Field activation, validation passes and error display for one form

use foorm_rules::{Checker, FieldRecord};
use tracing::{debug, trace};

use crate::active::ActiveFieldSet;
use crate::config::FormConfig;
use crate::descriptor::FieldDescriptor;
use crate::document::{id_selector, Document};
use crate::engine::RuleEngine;
use crate::error_state::ErrorState;

/// What should happen to a submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// Let the form submit
    Proceed,
    /// Cancel the default action
    Prevent,
}

impl SubmitAction {
    pub fn is_prevented(self) -> bool {
        self == SubmitAction::Prevent
    }
}

/// Validator bound to a single form.
///
/// Fields start inactive and become active on their first change event, or
/// all at once when the form is submitted. Only active fields are validated
/// and only they can show errors. Every pass re-reads all values first, so
/// rules depending on other fields always see what is in the document.
///
/// Event wiring is left to the caller: forward `change` events of
/// [`bound_fields`](Self::bound_fields) to [`on_change`](Self::on_change) and
/// the form's `submit` event to [`on_submit`](Self::on_submit).
pub struct FormValidator<D, E = Checker> {
    form_id: String,
    fields: Vec<FieldDescriptor>,
    bound: Vec<String>,
    active: ActiveFieldSet,
    errors: ErrorState,
    config: FormConfig,
    document: D,
    engine: E,
}

impl<D: Document> FormValidator<D> {
    /// Binds to `document` using the built-in rule engine
    pub fn new(form_id: impl Into<String>, fields: Vec<FieldDescriptor>, document: D) -> Self {
        Self::with_config(form_id, fields, document, FormConfig::default())
    }

    pub fn with_config(
        form_id: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        document: D,
        config: FormConfig,
    ) -> Self {
        let records: Vec<FieldRecord> = fields.iter().map(FieldDescriptor::to_record).collect();
        let engine = Checker::new(records);
        Self::with_engine(form_id, fields, document, engine, config)
    }
}

impl<D: Document, E: RuleEngine> FormValidator<D, E> {
    /// Binds to `document` using a caller-supplied engine that already knows
    /// the fields.
    ///
    /// Fields whose name matches no element are left unbound: they get no
    /// error container and never receive change events.
    pub fn with_engine(
        form_id: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        mut document: D,
        mut engine: E,
        config: FormConfig,
    ) -> Self {
        let form_id = form_id.into();

        for (rule, template) in &config.messages {
            engine.set_message(rule, template);
        }

        let selector = id_selector(fields.iter().map(|f| f.name.as_str()));
        let bound = document.resolve(&selector);
        debug!(form = %form_id, %selector, bound = bound.len(), "resolved form fields");

        for field in fields.iter().filter(|f| !bound.contains(&f.name)) {
            debug!(form = %form_id, field = %field.name, "no element for field, leaving it unbound");
        }

        for id in &bound {
            document.insert_error_container(id, &config.error_container(id));
        }

        Self {
            form_id,
            fields,
            bound,
            active: ActiveFieldSet::new(),
            errors: ErrorState::default(),
            config,
            document,
            engine,
        }
    }

    /// Validates every active field and updates their error display.
    ///
    /// Returns true iff no active field failed.
    pub fn validate(&mut self) -> bool {
        self.sync_values();

        let Self {
            fields,
            bound,
            active,
            errors,
            config,
            document,
            engine,
            ..
        } = self;

        let mut is_valid = true;

        for name in active.iter() {
            let Some(field) = fields.iter().find(|f| f.name == name) else {
                continue;
            };

            engine.clear_errors();
            engine.validate_field(&field.to_record());

            let container_id = config.error_id(name);
            match engine.errors().first() {
                Some(message) => {
                    trace!(field = name, %message, "field invalid");
                    is_valid = false;

                    if !bound.iter().any(|id| id == name) {
                        debug!(field = name, %message, "no error container for invalid field");
                        continue;
                    }
                    document.set_error_message(&container_id, message);
                    let height = document.error_message_height(&container_id);
                    document.set_error_offset(&container_id, -height);
                    document.set_error_visible(&container_id, true);
                    errors.show(name, message.as_str());
                }
                None => {
                    trace!(field = name, "field valid");
                    document.set_error_message(&container_id, "");
                    document.set_error_visible(&container_id, false);
                    errors.hide(name);
                }
            }
        }

        debug!(form = %self.form_id, active = self.active.len(), is_valid, "validated form");
        is_valid
    }

    /// Marks a field as touched. Returns true if it was newly activated.
    ///
    /// Names that are not registered fields are ignored.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.fields.iter().any(|f| f.name == name) {
            return false;
        }
        let added = self.active.activate(name);
        if added {
            debug!(form = %self.form_id, field = name, "field activated");
        }
        added
    }

    /// Handles a `change` event on a bound field: activates it, then
    /// re-validates all active fields.
    pub fn on_change(&mut self, field_id: &str) -> bool {
        if self.bound.iter().any(|id| id == field_id) {
            self.activate(field_id);
        } else {
            debug!(form = %self.form_id, field = field_id, "change on unbound element");
        }
        self.validate()
    }

    /// Handles the form's `submit` event: activates every field, in
    /// declaration order, then validates.
    pub fn on_submit(&mut self) -> SubmitAction {
        let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        for name in &names {
            self.activate(name);
        }

        if self.validate() {
            SubmitAction::Proceed
        } else {
            debug!(form = %self.form_id, "submission blocked");
            SubmitAction::Prevent
        }
    }

    /// Copies the live document value of every field into its descriptor and
    /// into the engine. Missing elements read as empty.
    fn sync_values(&mut self) {
        for field in &mut self.fields {
            field.value = self.document.value(&field.name).unwrap_or_default();
            self.engine.update_value(&field.name, &field.value);
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Ids of the fields that were found in the document
    pub fn bound_fields(&self) -> &[String] {
        &self.bound
    }

    pub fn active_fields(&self) -> &ActiveFieldSet {
        &self.active
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Message currently shown for `name`
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.message(name)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Access to the engine, e.g. to register callbacks or messages
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
