//! Formcheck: declarative field validation for HTML-style forms
//!
//! Formcheck follows a "pure core, imperative shell" split. Rules are
//! evaluated by pure functions with no side effects, while reading the host
//! form, presenting errors and gating submission live in a thin controller.
//!
//! # Core Concepts
//!
//! - **Rule**: required flag, pattern, length and numeric bounds, custom check
//! - **Evaluation**: ordered checks, the first failure decides the message
//! - **Error map**: every field currently known to be invalid
//! - **Submission gate**: blocks submission until the whole form is valid
//!
//! # Example
//!
//! ```rust
//! use formcheck::controller::{FormEvent, FormValidator, SubmissionOutcome};
//! use formcheck::core::{Rule, RuleSet};
//! use formcheck::form::InMemoryForm;
//! use formcheck::presentation::ControlRegistry;
//!
//! let rules = RuleSet::builder()
//!     .field("email", Rule::builder().required().pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))
//!     .unwrap()
//!     .field("password", Rule::builder().required().min_length(8))
//!     .unwrap()
//!     .build();
//!
//! let form = InMemoryForm::new()
//!     .with_control("email", "test@example.com")
//!     .with_control("password", "short");
//! let mut controls = ControlRegistry::default();
//! controls.register_with_error_region("email").register_with_error_region("password");
//!
//! let mut validator = FormValidator::new(form, controls, rules);
//! let outcome = validator.submit();
//!
//! assert_eq!(
//!     outcome,
//!     SubmissionOutcome::Rejected {
//!         invalid_fields: vec!["password".to_string()],
//!         focused: Some("password".to_string()),
//!     }
//! );
//! assert_eq!(
//!     validator.binder().control("password").unwrap().error_text(),
//!     Some("Minimum 8 characters required")
//! );
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod form;
pub mod presentation;
pub mod state;

// Re-export commonly used types
pub use crate::builder::{BuildError, RuleBuilder, RuleSetBuilder};
pub use crate::config::ValidatorConfig;
pub use crate::controller::{EventOutcome, FormEvent, FormValidator, SubmissionOutcome};
pub use crate::core::{FieldEvaluator, FieldInvalid, Rule, RuleSet, ValidationResult};
