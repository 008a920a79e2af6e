//! Outcome of evaluating one field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field failed its rule.
///
/// This is the only validation error kind; misconfigured rules surface as
/// an ordinary `FieldInvalid` too.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    pub field: String,
    pub message: String,
}

/// Result of evaluating a value against a rule.
///
/// An `Invalid` result always carries a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }

    /// Attach the field name, turning a failure into a [`FieldInvalid`].
    pub fn into_result(self, field: &str) -> Result<(), FieldInvalid> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(message) => Err(FieldInvalid {
                field: field.to_string(),
                message,
            }),
        }
    }
}
