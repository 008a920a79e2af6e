use crate::core::{FieldInvalid, RuleSet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Field name to current error message.
///
/// Presence means the field is invalid. Iteration order is the order in
/// which entries were added; full-form rebuilds add them in rule
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from accumulated failures, ordered by `rules`.
    pub fn from_validation(
        validation: Validation<(), NonEmptyVec<FieldInvalid>>,
        rules: &RuleSet,
    ) -> Self {
        let mut map = ErrorMap::new();
        if let Validation::Failure(errors) = validation {
            for FieldInvalid { field, message } in errors.iter().cloned() {
                map.entries.insert(field, message);
            }
        }
        let position = |field: &str| rules.position(field).unwrap_or(usize::MAX);
        map.entries
            .sort_by(|a, _, b, _| position(a.as_str()).cmp(&position(b.as_str())));
        map
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.entries.insert(field.to_string(), message.to_string());
    }

    /// Remove `field`, keeping the order of the others.
    pub fn remove(&mut self, field: &str) {
        self.entries.shift_remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;

    fn rules() -> RuleSet {
        RuleSet::builder()
            .field("first", Rule::builder())
            .unwrap()
            .field("second", Rule::builder())
            .unwrap()
            .field("third", Rule::builder())
            .unwrap()
            .build()
    }

    fn invalid(field: &str) -> FieldInvalid {
        FieldInvalid {
            field: field.to_string(),
            message: format!("{field} is bad"),
        }
    }

    #[test]
    fn rebuild_orders_by_declaration() {
        let validation = Validation::all_vec(vec![
            Validation::<(), NonEmptyVec<FieldInvalid>>::fail(invalid("third")),
            Validation::fail(invalid("first")),
        ])
        .map(|_| ());

        let map = ErrorMap::from_validation(validation, &rules());
        assert_eq!(map.fields().collect::<Vec<_>>(), vec!["first", "third"]);
        assert_eq!(map.first(), Some(("first", "first is bad")));
    }

    #[test]
    fn success_gives_empty_map() {
        let validation: Validation<(), NonEmptyVec<FieldInvalid>> = Validation::success(());
        assert!(ErrorMap::from_validation(validation, &rules()).is_empty());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut map = ErrorMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("c", "3");
        map.remove("a");
        assert_eq!(map.fields().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn insert_overwrites_message() {
        let mut map = ErrorMap::new();
        map.insert("a", "old");
        map.insert("a", "new");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some("new"));
    }
}
