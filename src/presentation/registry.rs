use super::{Presentation, PresentationBinder, PresentationConfig};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Error-text element next to a control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorRegion {
    pub text: String,
    pub role: Option<String>,
}

/// Presentation state of one control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlPresentation {
    pub classes: BTreeSet<String>,
    pub aria_invalid: Option<String>,
    pub error_region: Option<ErrorRegion>,
}

impl ControlPresentation {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error_region.as_ref().map(|r| r.text.as_str())
    }
}

/// In-memory control registry implementing [`PresentationBinder`].
///
/// Stands in for the document: each registered control carries its class
/// list, `aria-invalid` attribute and optional error region.
#[derive(Clone, Debug, Default)]
pub struct ControlRegistry {
    config: PresentationConfig,
    controls: IndexMap<String, ControlPresentation>,
}

impl ControlRegistry {
    pub fn new(config: PresentationConfig) -> Self {
        Self {
            config,
            controls: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Register a control without an error region.
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        self.controls.entry(name.into()).or_default();
        self
    }

    /// Register a control with an (initially empty) error region.
    pub fn register_with_error_region(&mut self, name: impl Into<String>) -> &mut Self {
        self.controls.entry(name.into()).or_default().error_region = Some(ErrorRegion::default());
        self
    }

    pub fn control(&self, name: &str) -> Option<&ControlPresentation> {
        self.controls.get(name)
    }

    /// Whether the control currently carries the invalid marker.
    pub fn is_marked_invalid(&self, name: &str) -> bool {
        self.control(name)
            .is_some_and(|c| c.has_class(&self.config.invalid_class))
    }
}

impl PresentationBinder for ControlRegistry {
    fn apply(&mut self, field: &str, presentation: Presentation<'_>) -> bool {
        let Some(control) = self.controls.get_mut(field) else {
            return false;
        };

        match presentation {
            Presentation::Invalid(message) => {
                control.classes.insert(self.config.invalid_class.clone());
                control.classes.remove(&self.config.valid_class);
                control.aria_invalid = Some("true".to_string());
                if let Some(region) = control.error_region.as_mut() {
                    region.text = message.to_string();
                    region.role = Some(self.config.alert_role.clone());
                }
            }
            Presentation::Valid => {
                control.classes.remove(&self.config.invalid_class);
                control.classes.insert(self.config.valid_class.clone());
                control.aria_invalid = Some("false".to_string());
                if let Some(region) = control.error_region.as_mut() {
                    region.text.clear();
                }
            }
        }
        true
    }

    fn configure(&mut self, config: &PresentationConfig) {
        self.config = config.clone();
    }
}
