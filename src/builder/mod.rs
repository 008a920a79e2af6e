//! Builders for rules and rule sets.
//!
//! Rules are immutable once built, so all configuration happens here. Rules
//! can be assembled fluently or loaded from serde definitions.

pub mod definition;
pub mod error;
pub mod rule;
pub mod rule_set;

pub use definition::RuleDefinition;
pub use error::BuildError;
pub use rule::RuleBuilder;
pub use rule_set::RuleSetBuilder;
