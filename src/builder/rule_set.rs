//! Builder for a form's rule set.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Rule, RuleSet};

/// Fluent builder for [`RuleSet`].
///
/// Fields are declared in call order; declaring a field twice replaces the
/// earlier rule but keeps its original position.
///
/// # Example
///
/// ```rust
/// use formcheck::builder::RuleSetBuilder;
/// use formcheck::core::Rule;
///
/// let rules = RuleSetBuilder::new()
///     .field("email", Rule::builder().required().pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))
///     .unwrap()
///     .field("phone", Rule::builder().pattern(r"^\d{10,11}$"))
///     .unwrap()
///     .build();
///
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field using a rule builder.
    /// Returns an error if the rule fails to build.
    pub fn field(
        self,
        name: impl Into<String>,
        builder: RuleBuilder,
    ) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rule(name, rule)
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Result<Self, BuildError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::EmptyFieldName);
        }
        self.rules.insert(name, rule);
        Ok(self)
    }

    pub fn build(self) -> RuleSet {
        self.rules
    }
}
