//! Errors raised while building rules.
//!
//! These never occur during evaluation; a rule that builds is always
//! evaluable.

use thiserror::Error;

/// Errors that can occur when building rules and rule sets.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: Box<fancy_regex::Error>,
    },

    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Malformed rule definition: {0}")]
    Definition(#[from] serde_json::Error),
}
