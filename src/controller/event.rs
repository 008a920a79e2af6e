use super::submission::SubmissionOutcome;
use crate::core::ValidationResult;

/// Interaction delivered to the engine.
///
/// Values are not carried: the engine reads the control's current value
/// from the form when it handles the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Control lost focus.
    Blur { field: String },
    /// Control value changed.
    Input { field: String },
    /// Form submission requested.
    Submit,
}

impl FormEvent {
    pub fn blur(field: impl Into<String>) -> Self {
        FormEvent::Blur {
            field: field.into(),
        }
    }

    pub fn input(field: impl Into<String>) -> Self {
        FormEvent::Input {
            field: field.into(),
        }
    }
}

/// What handling an event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Field has no rule or no control.
    Ignored,
    /// Input on a field not currently shown as invalid.
    Skipped,
    /// Field was re-evaluated.
    Evaluated(ValidationResult),
    /// Submission ran through the gate.
    Submitted(SubmissionOutcome),
}
