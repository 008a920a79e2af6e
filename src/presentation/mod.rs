//! Visual and assistive-technology reflection of field validity.
//!
//! A [`PresentationBinder`] is a sink: it never decides validity, it only
//! shows what the engine tells it to.

mod registry;

pub use registry::{ControlPresentation, ControlRegistry, ErrorRegion};

use serde::{Deserialize, Serialize};

/// What to show on one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation<'a> {
    Invalid(&'a str),
    Valid,
}

/// Applies presentation to the host's controls.
///
/// For `Invalid(message)` an implementation must turn the invalid marker on
/// and the valid marker off, set `aria-invalid="true"`, and, when the field
/// has an error-text region, put `message` in it and mark the region as an
/// alert. `Valid` is the mirror image with `aria-invalid="false"` and empty
/// error text. Fields without a control are ignored and report `false`.
pub trait PresentationBinder {
    /// Show `presentation` on `field`; returns whether a control was found.
    fn apply(&mut self, field: &str, presentation: Presentation<'_>) -> bool;

    /// Adopt the marker names of an engine configuration.
    fn configure(&mut self, _config: &PresentationConfig) {}
}

/// Marker names used by [`ControlRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub invalid_class: String,
    pub valid_class: String,
    /// Role given to the error-text region when it shows a message.
    pub alert_role: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            invalid_class: "is-invalid".to_string(),
            valid_class: "is-valid".to_string(),
            alert_role: "alert".to_string(),
        }
    }
}
