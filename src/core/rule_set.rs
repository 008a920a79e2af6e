//! Field name to rule mapping, in declaration order.

use super::rule::Rule;
use crate::builder::{BuildError, RuleDefinition, RuleSetBuilder};
use indexmap::IndexMap;

/// Every rule of a form, keyed by field name.
///
/// Declaration order is kept: full-form validation, error presentation and
/// focus selection all walk fields in this order. Inserting a field that
/// already exists replaces its rule in place.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Build a rule set from a JSON object of field name to definition.
    ///
    /// Object key order becomes declaration order.
    ///
    /// ```rust
    /// use formcheck::core::RuleSet;
    ///
    /// let rules = RuleSet::from_json(r#"{
    ///     "email": { "required": true, "pattern": "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$" },
    ///     "age": { "min": 18, "max": 130 }
    /// }"#).unwrap();
    ///
    /// assert_eq!(rules.field_names().collect::<Vec<_>>(), vec!["email", "age"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let definitions: IndexMap<String, RuleDefinition> = serde_json::from_str(json)?;
        definitions
            .into_iter()
            .try_fold(RuleSetBuilder::new(), |builder, (field, definition)| {
                builder.rule(field, Rule::try_from(definition)?)
            })
            .map(RuleSetBuilder::build)
    }

    pub(crate) fn insert(&mut self, field: String, rule: Rule) {
        self.rules.insert(field, rule);
    }

    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.rules.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Declaration index of `field`.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.rules.get_index_of(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
