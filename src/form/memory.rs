//! Headless form host.

use super::{FormData, FormHandle};
use indexmap::IndexMap;

/// Form kept entirely in memory.
///
/// Useful for server-side rendering checks, tests and any host without a
/// real document. It remembers focus moves, submit-control toggles and
/// native submissions so callers can inspect what the engine did.
#[derive(Clone, Debug, Default)]
pub struct InMemoryForm {
    controls: IndexMap<String, String>,
    focused: Option<String>,
    submit_disabled: Option<bool>,
    submit_toggles: Vec<bool>,
    native_submissions: usize,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control with an initial value.
    pub fn with_control(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.controls.insert(name.into(), value.into());
        self
    }

    /// Give the form a submit control, initially enabled.
    pub fn with_submit_control(mut self) -> Self {
        self.submit_disabled = Some(false);
        self
    }

    /// Change a control's value; returns false if the control does not exist.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.controls.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// `None` when the form has no submit control.
    pub fn submit_disabled(&self) -> Option<bool> {
        self.submit_disabled
    }

    /// Every `set_submit_enabled` argument seen, in order.
    pub fn submit_toggles(&self) -> &[bool] {
        &self.submit_toggles
    }

    pub fn native_submissions(&self) -> usize {
        self.native_submissions
    }
}

impl FormHandle for InMemoryForm {
    fn snapshot(&self) -> FormData {
        self.controls
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    fn control_value(&self, name: &str) -> Option<String> {
        self.controls.get(name).cloned()
    }

    fn focus(&mut self, name: &str) -> bool {
        if self.controls.contains_key(name) {
            self.focused = Some(name.to_string());
            true
        } else {
            false
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if let Some(disabled) = self.submit_disabled.as_mut() {
            *disabled = !enabled;
            self.submit_toggles.push(enabled);
        }
    }

    fn submit_native(&mut self) {
        self.native_submissions += 1;
    }
}
