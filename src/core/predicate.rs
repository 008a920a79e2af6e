//! Custom check slot of a rule.
//!
//! A rule either has no custom check (`Option::None`) or a `Predicate`
//! wrapping a pure function over the trimmed value.

use std::fmt;
use std::sync::Arc;

/// What a custom check reports for one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Value accepted.
    Pass,
    /// Value rejected without a message of its own.
    Fail,
    /// Value rejected with a custom message.
    FailWith(String),
}

impl From<bool> for CheckOutcome {
    fn from(ok: bool) -> Self {
        if ok {
            CheckOutcome::Pass
        } else {
            CheckOutcome::Fail
        }
    }
}

impl From<String> for CheckOutcome {
    fn from(message: String) -> Self {
        CheckOutcome::FailWith(message)
    }
}

impl From<&str> for CheckOutcome {
    fn from(message: &str) -> Self {
        CheckOutcome::FailWith(message.to_string())
    }
}

impl<E: Into<String>> From<Result<(), E>> for CheckOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Pass,
            Err(message) => CheckOutcome::FailWith(message.into()),
        }
    }
}

/// Pure custom check run after all built-in checks pass.
///
/// The function must be deterministic and synchronous.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{CheckOutcome, Predicate};
///
/// let no_admin = Predicate::new(|v: &str| {
///     if v.eq_ignore_ascii_case("admin") {
///         CheckOutcome::FailWith("That name is reserved".into())
///     } else {
///         CheckOutcome::Pass
///     }
/// });
///
/// assert_eq!(no_admin.check("alice"), CheckOutcome::Pass);
/// assert!(matches!(no_admin.check("ADMIN"), CheckOutcome::FailWith(_)));
///
/// // anything convertible into an outcome works too
/// let short = Predicate::new(|v: &str| v.len() < 4);
/// assert_eq!(short.check("abcdef"), CheckOutcome::Fail);
/// ```
#[derive(Clone)]
pub struct Predicate {
    check: Arc<dyn Fn(&str) -> CheckOutcome + Send + Sync>,
}

impl Predicate {
    pub fn new<F, O>(check: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CheckOutcome>,
    {
        Predicate {
            check: Arc::new(move |value: &str| check(value).into()),
        }
    }

    pub fn check(&self, value: &str) -> CheckOutcome {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
