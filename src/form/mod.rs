//! Host form access.
//!
//! The engine never owns the controls it validates. It reads values and
//! drives focus and submission through a [`FormHandle`] supplied by the host.

mod memory;

pub use memory::InMemoryForm;

use serde::{Deserialize, Serialize};

/// Snapshot of every control value, in document order.
///
/// Equivalent to a form-encoded key/value list: a name may appear more than
/// once, and [`get`](FormData::get) returns the first value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormData {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// What the engine needs from the host form.
pub trait FormHandle {
    /// Current value of every control.
    fn snapshot(&self) -> FormData;

    /// Current value of the control named `name`, `None` if no such control.
    fn control_value(&self, name: &str) -> Option<String>;

    fn has_control(&self, name: &str) -> bool {
        self.control_value(name).is_some()
    }

    /// Move input focus to the control; returns whether it exists.
    fn focus(&mut self, name: &str) -> bool;

    /// Enable or disable the submit control. No-op when there is none.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Perform the browser's native submission.
    fn submit_native(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_value() {
        let data: FormData = [("tag", "a"), ("tag", "b"), ("name", "x")]
            .into_iter()
            .collect();
        assert_eq!(data.get("tag"), Some("a"));
        assert_eq!(data.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(data.get("missing"), None);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn append_keeps_order() {
        let mut data = FormData::new();
        data.append("b", "2");
        data.append("a", "1");
        assert_eq!(data.iter().collect::<Vec<_>>(), vec![("b", "2"), ("a", "1")]);
    }
}
