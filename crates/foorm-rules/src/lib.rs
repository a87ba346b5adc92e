//! Foorm Rules
//!
//! Rule engine behind Foorm. Evaluates validate.js-style rule strings such as
//! `required|min_length[6]|matches[password]` against field values and collects
//! human-readable error messages.
//!
//! ## Example
//!
//! ```rust
//! use foorm_rules::{Checker, FieldRecord};
//!
//! let mut checker = Checker::new(vec![
//!     FieldRecord::new("email", "Email", "required|valid_email"),
//! ]);
//! checker.set_value("email", "not-an-email");
//!
//! let record = checker.field("email").cloned().unwrap();
//! checker.validate_field(&record);
//!
//! assert_eq!(
//!     checker.errors(),
//!     ["The Email field must contain a valid email address."]
//! );
//! ```

pub mod checker;
pub mod date;
pub mod email;
pub mod messages;
pub mod numeric;
pub mod patterns;
pub mod rule;
pub mod string;

pub use checker::{Callback, Checker, FieldRecord};
pub use rule::{Rule, RuleCall};
