//! Builder for a single field rule.

use crate::builder::error::BuildError;
use crate::core::{CheckOutcome, Pattern, Predicate, Rule};

enum PatternSource {
    Source(String),
    Compiled(Pattern),
}

/// Fluent builder for [`Rule`].
///
/// Pattern sources are compiled in [`build`](RuleBuilder::build), which is
/// the only fallible step.
#[derive(Default)]
pub struct RuleBuilder {
    required: bool,
    pattern: Option<PatternSource>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    validator: Option<Predicate>,
    message: Option<String>,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that are empty after trimming.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the required flag explicitly.
    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Regex source the trimmed value must match (compiled at build).
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(PatternSource::Source(source.into()));
        self
    }

    /// Use an already compiled pattern.
    pub fn compiled_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(PatternSource::Compiled(pattern));
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Custom check run last, on the trimmed value.
    pub fn validator<F, O>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CheckOutcome>,
    {
        self.validator = Some(Predicate::new(check));
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.validator = Some(predicate);
        self
    }

    /// Message used for every failure of this rule.
    ///
    /// An empty message is ignored.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    pub fn build(self) -> Result<Rule, BuildError> {
        let pattern = match self.pattern {
            Some(PatternSource::Source(source)) => Some(Pattern::new(&source)?),
            Some(PatternSource::Compiled(pattern)) => Some(pattern),
            None => None,
        };

        Ok(Rule {
            required: self.required,
            pattern,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
            validator: self.validator,
            message: self.message,
        })
    }
}
