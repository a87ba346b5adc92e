//! # Foorm
//!
//! Inline validation for HTML forms. A [`FormValidator`] binds to a form's
//! fields, activates each field the first time the user changes it, and on
//! every change re-validates all active fields through a [`RuleEngine`],
//! showing the first error of each failing field directly above it. Submitting
//! activates every field and blocks the submission while any field is invalid.
//!
//! The DOM is reached through the [`Document`] trait; [`MemoryDocument`] is an
//! in-memory implementation and the `foorm-wasm` crate provides the browser one.
//!
//! ## Example
//!
//! ```rust
//! use foorm::{FieldDescriptor, FormValidator, MemoryDocument, SubmitAction};
//!
//! let document = MemoryDocument::new().with_field("email", "");
//! let fields = vec![FieldDescriptor::new("email", "required|valid_email")];
//!
//! let mut form = FormValidator::new("signup", fields, document);
//!
//! form.document_mut().set_value("email", "not-an-email");
//! assert!(!form.on_change("email"));
//! assert!(form.error_for("email").is_some());
//!
//! form.document_mut().set_value("email", "a@b.com");
//! assert!(form.on_change("email"));
//! assert_eq!(form.on_submit(), SubmitAction::Proceed);
//! ```

pub mod active;
pub mod config;
pub mod descriptor;
pub mod document;
pub mod engine;
pub mod error_state;
pub mod validator;

pub use active::ActiveFieldSet;
pub use config::FormConfig;
pub use descriptor::{FieldDescriptor, FormSpec};
pub use document::{Document, ErrorContainer, MemoryDocument};
pub use engine::RuleEngine;
pub use error_state::ErrorState;
pub use validator::{FormValidator, SubmitAction};

pub use foorm_rules::{Checker, FieldRecord};
