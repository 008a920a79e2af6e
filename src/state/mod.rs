//! Per-form validation state.
//!
//! The error map lists every field currently known to be invalid. It is
//! rebuilt from scratch by full-form validation and patched one field at a
//! time by interaction events.

mod error_map;
mod validate;

pub use error_map::ErrorMap;
pub use validate::validate_all;

use crate::core::{FieldEvaluator, RuleSet, ValidationResult};
use crate::form::FormData;

/// Error map owned by one engine instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: ErrorMap,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Replace the whole map with the failures of `rules` against `data`.
    ///
    /// Returns true when no field failed.
    pub fn rebuild(&mut self, evaluator: &FieldEvaluator, rules: &RuleSet, data: &FormData) -> bool {
        self.errors = ErrorMap::from_validation(validate_all(evaluator, rules, data), rules);
        self.errors.is_empty()
    }

    /// Record the latest result for one field.
    pub fn record(&mut self, field: &str, result: &ValidationResult) {
        match result.message() {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
