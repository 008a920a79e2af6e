//! Pure core of the validation engine.
//!
//! This module contains everything that decides validity without touching
//! the host form:
//! - Rules, rule sets and custom predicates
//! - The field evaluator and its message generation
//!
//! Nothing in here performs I/O or logging.

mod evaluate;
mod field_name;
mod predicate;
mod result;
mod rule;
mod rule_set;

pub use evaluate::{FieldEvaluator, NumericParsing};
pub use field_name::format_field_name;
pub use predicate::{CheckOutcome, Predicate};
pub use result::{FieldInvalid, ValidationResult};
pub use rule::{Pattern, Rule};
pub use rule_set::RuleSet;
