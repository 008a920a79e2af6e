//! Full-form validation.
//!
//! Every ruled field is checked and ALL failures are accumulated with
//! stillwater's `Validation`, instead of stopping at the first invalid field.

use crate::core::{FieldEvaluator, FieldInvalid, RuleSet};
use crate::form::FormData;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Evaluate every field of `rules` against `data`.
///
/// Fields missing from `data` are evaluated as empty; entries of `data`
/// without a rule are never looked at. Pure: the same inputs always give the
/// same result.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{FieldEvaluator, Rule, RuleSet};
/// use formcheck::form::FormData;
/// use formcheck::state::validate_all;
///
/// let rules = RuleSet::builder()
///     .field("email", Rule::builder().required())
///     .unwrap()
///     .build();
/// let data = FormData::new();
///
/// assert!(validate_all(&FieldEvaluator::default(), &rules, &data).is_failure());
/// ```
pub fn validate_all(
    evaluator: &FieldEvaluator,
    rules: &RuleSet,
    data: &FormData,
) -> Validation<(), NonEmptyVec<FieldInvalid>> {
    let checks: Vec<Validation<(), NonEmptyVec<FieldInvalid>>> = rules
        .iter()
        .map(|(field, rule)| {
            let value = data.get(field).unwrap_or("");
            match evaluator.evaluate(field, rule, value).into_result(field) {
                Ok(()) => Validation::success(()),
                Err(invalid) => Validation::fail(invalid),
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
