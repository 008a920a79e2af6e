//! The validation engine for one form.

use super::event::{EventOutcome, FormEvent};
use super::submission::{Delivery, SubmissionGate, SubmissionOutcome, SubmissionPhase};
use crate::config::ValidatorConfig;
use crate::core::{FieldEvaluator, RuleSet, ValidationResult};
use crate::form::{FormData, FormHandle};
use crate::presentation::{Presentation, PresentationBinder};
use crate::state::{ErrorMap, ValidationState};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Callback receiving the form data of an accepted submission.
pub type SubmitHandler = Box<dyn FnMut(&FormData)>;

/// Validation engine bound to one form.
///
/// Owns its rule set, error map and submission gate; nothing is shared
/// between instances. Events are handled one at a time through `&mut self`.
///
/// # Example
///
/// ```rust
/// use formcheck::controller::{EventOutcome, FormEvent, FormValidator};
/// use formcheck::core::{Rule, RuleSet};
/// use formcheck::form::InMemoryForm;
/// use formcheck::presentation::ControlRegistry;
///
/// let rules = RuleSet::builder()
///     .field("email", Rule::builder().required())
///     .unwrap()
///     .build();
/// let form = InMemoryForm::new().with_control("email", "");
/// let mut controls = ControlRegistry::default();
/// controls.register_with_error_region("email");
///
/// let mut validator = FormValidator::new(form, controls, rules);
/// let outcome = validator.dispatch(FormEvent::blur("email"));
///
/// assert!(matches!(outcome, EventOutcome::Evaluated(ref r) if !r.is_valid()));
/// assert!(validator.binder().is_marked_invalid("email"));
/// ```
pub struct FormValidator<F: FormHandle, B: PresentationBinder> {
    form: F,
    binder: B,
    rules: RuleSet,
    evaluator: FieldEvaluator,
    state: ValidationState,
    marked_invalid: HashSet<String>,
    gate: SubmissionGate,
    on_submit: Option<SubmitHandler>,
}

impl<F: FormHandle, B: PresentationBinder> FormValidator<F, B> {
    /// Engine with default numeric parsing; the binder keeps its own markers.
    pub fn new(form: F, binder: B, rules: RuleSet) -> Self {
        Self {
            form,
            binder,
            rules,
            evaluator: FieldEvaluator::default(),
            state: ValidationState::new(),
            marked_invalid: HashSet::new(),
            gate: SubmissionGate::new(),
            on_submit: None,
        }
    }

    /// Engine configured from `config`, including the binder's markers.
    pub fn with_config(form: F, mut binder: B, rules: RuleSet, config: &ValidatorConfig) -> Self {
        binder.configure(&config.presentation);
        Self {
            evaluator: FieldEvaluator::new(config.numeric_parsing),
            ..Self::new(form, binder, rules)
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn errors(&self) -> &ErrorMap {
        self.state.errors()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the host form, e.g. to change control values.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.gate.phase()
    }

    pub fn submission_attempts(&self) -> usize {
        self.gate.attempts()
    }

    /// Whether the engine last presented `field` as invalid.
    pub fn is_marked_invalid(&self, field: &str) -> bool {
        self.marked_invalid.contains(field)
    }

    /// Evaluate `raw` for `field`; fields without a rule are always valid.
    pub fn evaluate_field(&self, field: &str, raw: &str) -> ValidationResult {
        match self.rules.get(field) {
            Some(rule) => self.evaluator.evaluate(field, rule, raw),
            None => ValidationResult::Valid,
        }
    }

    /// Validate every ruled field against the form's current values.
    ///
    /// Rebuilds the error map from scratch and returns true when it ends up
    /// empty. Presentation is not touched.
    pub fn validate_form(&mut self) -> bool {
        let data = self.form.snapshot();
        self.state.rebuild(&self.evaluator, &self.rules, &data)
    }

    pub fn apply_error_presentation(&mut self, field: &str, message: &str) {
        if self.binder.apply(field, Presentation::Invalid(message)) {
            self.marked_invalid.insert(field.to_string());
        }
    }

    pub fn apply_valid_presentation(&mut self, field: &str) {
        self.binder.apply(field, Presentation::Valid);
        self.marked_invalid.remove(field);
    }

    /// Show every ruled field as valid and empty the error map.
    pub fn clear_all_error_presentation(&mut self) {
        let fields: Vec<String> = self.rules.field_names().map(str::to_string).collect();
        for field in &fields {
            self.apply_valid_presentation(field);
        }
        self.state.clear();
    }

    /// Deliver accepted submissions to `handler` instead of submitting natively.
    pub fn register_submit_handler<H>(&mut self, handler: H)
    where
        H: FnMut(&FormData) + 'static,
    {
        self.on_submit = Some(Box::new(handler));
    }

    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Blur { field } => self.handle_blur(&field),
            FormEvent::Input { field } => self.handle_input(&field),
            FormEvent::Submit => EventOutcome::Submitted(self.submit()),
        }
    }

    /// Re-evaluate a field that lost focus and present the result.
    pub fn handle_blur(&mut self, field: &str) -> EventOutcome {
        let Some(value) = self.ruled_control_value(field) else {
            return EventOutcome::Ignored;
        };

        let result = self.evaluate_field(field, &value);
        self.state.record(field, &result);
        match result.message() {
            Some(message) => self.apply_error_presentation(field, message),
            None => self.apply_valid_presentation(field),
        }
        debug!(field, valid = result.is_valid(), "blur re-evaluated field");
        EventOutcome::Evaluated(result)
    }

    /// Re-evaluate a changed field, but only if it is shown as invalid.
    ///
    /// Typing can clear an error or refresh its message; it never marks a
    /// field invalid that was not already.
    pub fn handle_input(&mut self, field: &str) -> EventOutcome {
        let Some(value) = self.ruled_control_value(field) else {
            return EventOutcome::Ignored;
        };
        if !self.is_marked_invalid(field) {
            return EventOutcome::Skipped;
        }

        let result = self.evaluate_field(field, &value);
        self.state.record(field, &result);
        match result.message() {
            Some(message) => self.apply_error_presentation(field, message),
            None => self.apply_valid_presentation(field),
        }
        debug!(field, valid = result.is_valid(), "input re-evaluated field");
        EventOutcome::Evaluated(result)
    }

    /// Run a submission through the gate.
    ///
    /// Native submission is never performed unless the form is valid and no
    /// submit handler is registered.
    pub fn submit(&mut self) -> SubmissionOutcome {
        self.gate.begin();
        self.form.set_submit_enabled(false);

        let valid = self.validate_form();
        let outcome = if self.gate.settle(valid) == SubmissionPhase::Accepted {
            self.form.set_submit_enabled(true);
            let delivery = match self.on_submit.as_mut() {
                Some(handler) => {
                    let data = self.form.snapshot();
                    handler(&data);
                    Delivery::Handler
                }
                None => {
                    self.form.submit_native();
                    Delivery::Native
                }
            };
            info!(?delivery, "submission accepted");
            SubmissionOutcome::Accepted { delivery }
        } else {
            let errors: Vec<(String, String)> = self
                .state
                .errors()
                .iter()
                .map(|(field, message)| (field.to_string(), message.to_string()))
                .collect();
            for (field, message) in &errors {
                self.apply_error_presentation(field, message);
            }
            let focused = errors
                .iter()
                .map(|(field, _)| field)
                .find(|field| self.form.focus(field))
                .cloned();
            self.form.set_submit_enabled(true);
            info!(invalid = errors.len(), focused = ?focused, "submission rejected");
            SubmissionOutcome::Rejected {
                invalid_fields: errors.into_iter().map(|(field, _)| field).collect(),
                focused,
            }
        };

        self.gate.finish();
        outcome
    }

    /// Give back the form and binder.
    pub fn into_parts(self) -> (F, B) {
        (self.form, self.binder)
    }

    fn ruled_control_value(&self, field: &str) -> Option<String> {
        if !self.rules.contains(field) {
            return None;
        }
        let value = self.form.control_value(field);
        if value.is_none() {
            warn!(field, "no control found for ruled field");
        }
        value
    }
}
