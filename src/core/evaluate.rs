//! Pure rule evaluation.
//!
//! Checks run in a fixed order and the first failing one decides the
//! message: required, pattern, min length, max length, min, max, custom.

use super::field_name::format_field_name;
use super::predicate::CheckOutcome;
use super::result::ValidationResult;
use super::rule::Rule;
use serde::{Deserialize, Serialize};

/// How `min`/`max` read a number out of the trimmed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericParsing {
    /// Longest numeric prefix, so `"5abc"` reads as `5`.
    #[default]
    Permissive,
    /// The whole value must be a decimal number literal. `Infinity` is the
    /// only spelled-out value accepted.
    Strict,
}

impl NumericParsing {
    /// Parse `value`; `None` when no number can be read.
    pub fn parse(self, value: &str) -> Option<f64> {
        let parsed = match self {
            NumericParsing::Permissive => parse_float_prefix(value),
            NumericParsing::Strict => parse_float_exact(value),
        };
        parsed.filter(|n| !n.is_nan())
    }
}

/// Read the longest float literal at the start of `value`.
///
/// Accepts an optional sign, digits with at most one decimal point, an
/// optional exponent and the literal `Infinity`. Leading whitespace is
/// skipped.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse all of `value` as a number literal.
///
/// Only digits, sign, decimal point and exponent characters are handed to
/// the float parser, so `inf` and `NaN` spellings are rejected.
fn parse_float_exact(value: &str) -> Option<f64> {
    let s = value.trim();
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Render a bound the way a browser prints a number.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with an
/// explicit sign, everything else plain decimal notation.
fn display_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    n.to_string()
}

/// Evaluates raw values against rules.
///
/// Stateless apart from the numeric parsing mode; every call is pure.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{FieldEvaluator, Rule, ValidationResult};
///
/// let rule = Rule::builder().required().min_length(8).build().unwrap();
/// let evaluator = FieldEvaluator::default();
///
/// assert_eq!(
///     evaluator.evaluate("password", &rule, "   "),
///     ValidationResult::Invalid("Password is required".into())
/// );
/// assert_eq!(
///     evaluator.evaluate("password", &rule, "short"),
///     ValidationResult::Invalid("Minimum 8 characters required".into())
/// );
/// assert!(evaluator.evaluate("password", &rule, "long enough").is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldEvaluator {
    numeric: NumericParsing,
}

impl FieldEvaluator {
    pub fn new(numeric: NumericParsing) -> Self {
        Self { numeric }
    }

    pub fn numeric_parsing(&self) -> NumericParsing {
        self.numeric
    }

    /// Evaluate `raw` for `field` under `rule`.
    pub fn evaluate(&self, field: &str, rule: &Rule, raw: &str) -> ValidationResult {
        let value = raw.trim();
        let fail = |generated: String| {
            ValidationResult::Invalid(rule.message().map(str::to_string).unwrap_or(generated))
        };

        if value.is_empty() {
            return if rule.required {
                fail(format!("{} is required", format_field_name(field)))
            } else {
                ValidationResult::Valid
            };
        }

        if let Some(pattern) = &rule.pattern {
            if !pattern.is_match(value) {
                return fail(format!("{} format is invalid", format_field_name(field)));
            }
        }

        let length = value.chars().count();
        if let Some(min_length) = rule.min_length {
            if length < min_length {
                return fail(format!("Minimum {min_length} characters required"));
            }
        }
        if let Some(max_length) = rule.max_length {
            if length > max_length {
                return fail(format!("Maximum {max_length} characters allowed"));
            }
        }

        if let Some(min) = rule.min {
            if self.numeric.parse(value).is_none_or(|n| n < min) {
                return fail(format!("Minimum value is {}", display_number(min)));
            }
        }
        if let Some(max) = rule.max {
            if self.numeric.parse(value).is_none_or(|n| n > max) {
                return fail(format!("Maximum value is {}", display_number(max)));
            }
        }

        if let Some(validator) = &rule.validator {
            match validator.check(value) {
                CheckOutcome::Pass => {}
                CheckOutcome::FailWith(message) if !message.is_empty() => {
                    return ValidationResult::Invalid(message);
                }
                CheckOutcome::FailWith(_) | CheckOutcome::Fail => {
                    return fail("Invalid value".to_string());
                }
            }
        }

        ValidationResult::Valid
    }
}
