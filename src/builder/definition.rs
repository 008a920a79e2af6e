//! Rules declared as data.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::Rule;
use serde::{Deserialize, Serialize};

/// Serializable form of a [`Rule`].
///
/// Mirrors every rule attribute except the custom validator. Keys use the
/// camelCase spelling common in form markup (`minLength`), snake_case is
/// accepted as well.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuleDefinition {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RuleDefinition> for RuleBuilder {
    fn from(definition: RuleDefinition) -> Self {
        let mut builder = RuleBuilder::new().required_if(definition.required);
        if let Some(pattern) = definition.pattern {
            builder = builder.pattern(pattern);
        }
        if let Some(n) = definition.min_length {
            builder = builder.min_length(n);
        }
        if let Some(n) = definition.max_length {
            builder = builder.max_length(n);
        }
        if let Some(min) = definition.min {
            builder = builder.min(min);
        }
        if let Some(max) = definition.max {
            builder = builder.max(max);
        }
        if let Some(message) = definition.message {
            builder = builder.message(message);
        }
        builder
    }
}

impl TryFrom<RuleDefinition> for Rule {
    type Error = BuildError;

    fn try_from(definition: RuleDefinition) -> Result<Self, Self::Error> {
        RuleBuilder::from(definition).build()
    }
}
