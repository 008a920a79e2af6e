//! Declarative constraints for one form field.

use super::predicate::Predicate;
use crate::builder::{BuildError, RuleBuilder};
use fancy_regex::Regex;
use std::fmt;

/// Compiled regular expression with search semantics.
///
/// Look-around is supported, so password-strength style patterns such as
/// `^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)` compile. `\d`, `\w` and `\b` (and
/// their negations) are ASCII-only, as in browser regular expressions.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, BuildError> {
        Regex::new(&ascii_classes(source))
            .map(|regex| Pattern {
                source: source.to_string(),
                regex,
            })
            .map_err(|source_err| BuildError::InvalidPattern {
                pattern: source.to_string(),
                source: Box::new(source_err),
            })
    }

    /// Whether the pattern matches anywhere in `value`.
    ///
    /// A matcher failure (backtrack limit) is reported as no match.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value).unwrap_or(false)
    }

    /// Source as written, before class rewriting.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

const WORD: &str = "0-9A-Za-z_";
const WORD_BOUNDARY: &str =
    "(?:(?<=[0-9A-Za-z_])(?![0-9A-Za-z_])|(?<![0-9A-Za-z_])(?=[0-9A-Za-z_]))";
const NOT_WORD_BOUNDARY: &str =
    "(?:(?<=[0-9A-Za-z_])(?=[0-9A-Za-z_])|(?<![0-9A-Za-z_])(?![0-9A-Za-z_]))";

/// Rewrite the Unicode-aware shorthand classes into ASCII ones.
///
/// Inside a bracket class only `\d` and `\w` are rewritten; the negated
/// forms have no in-class ASCII spelling and are left alone.
fn ascii_classes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(next) = chars.next() else {
                    out.push(c);
                    break;
                };
                match (next, in_class) {
                    ('d', false) => out.push_str("[0-9]"),
                    ('d', true) => out.push_str("0-9"),
                    ('D', false) => out.push_str("[^0-9]"),
                    ('w', false) => {
                        out.push('[');
                        out.push_str(WORD);
                        out.push(']');
                    }
                    ('w', true) => out.push_str(WORD),
                    ('W', false) => {
                        out.push_str("[^");
                        out.push_str(WORD);
                        out.push(']');
                    }
                    ('b', false) => out.push_str(WORD_BOUNDARY),
                    ('B', false) => out.push_str(NOT_WORD_BOUNDARY),
                    _ => {
                        out.push(c);
                        out.push(next);
                    }
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Constraint set for one field.
///
/// Immutable once built; construct with [`Rule::builder`]. A default rule
/// has no constraints and accepts everything.
///
/// # Example
///
/// ```rust
/// use formcheck::core::Rule;
///
/// let rule = Rule::builder()
///     .required()
///     .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
///     .message("Please enter a valid email address")
///     .build()
///     .unwrap();
///
/// assert!(rule.is_required());
/// assert_eq!(rule.message(), Some("Please enter a valid email address"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Rule {
    pub(crate) required: bool,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) validator: Option<Predicate>,
    pub(crate) message: Option<String>,
}

impl Rule {
    pub fn builder() -> RuleBuilder {
        RuleBuilder::new()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn validator(&self) -> Option<&Predicate> {
        self.validator.as_ref()
    }

    /// Override for every generated message; never empty when present.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
