//! Submission gate.
//!
//! `Idle -> Validating -> {Accepted, Rejected} -> Idle`. The gate only
//! tracks phases; the engine performs the work of each phase.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phase of the submission gate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Accepted,
    Rejected,
}

impl SubmissionPhase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether the gate may move from `self` to `to`.
    pub fn can_advance_to(self, to: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, to),
            (Idle, Validating)
                | (Validating, Accepted)
                | (Validating, Rejected)
                | (Accepted, Idle)
                | (Rejected, Idle)
        )
    }
}

/// How an accepted submission was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    /// The registered submit handler received the form data.
    Handler,
    /// No handler was registered; native submission was performed.
    Native,
}

/// Result of one submit event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Accepted {
        delivery: Delivery,
    },
    Rejected {
        /// Invalid fields in declaration order.
        invalid_fields: Vec<String>,
        /// Field that received focus, if any had a control.
        focused: Option<String>,
    },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

/// Current phase plus the number of submissions started.
///
/// Each step is only reachable from the phase before it, so a submission
/// always walks the full cycle back to `Idle`.
#[derive(Clone, Debug)]
pub struct SubmissionGate {
    phase: SubmissionPhase,
    attempts: usize,
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            attempts: 0,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Number of submissions started so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// `Idle -> Validating`; starts a new attempt.
    pub fn begin(&mut self) {
        self.attempts += 1;
        self.step(SubmissionPhase::Validating);
    }

    /// `Validating -> Accepted | Rejected`.
    pub fn settle(&mut self, valid: bool) -> SubmissionPhase {
        let to = if valid {
            SubmissionPhase::Accepted
        } else {
            SubmissionPhase::Rejected
        };
        self.step(to);
        to
    }

    /// `Accepted | Rejected -> Idle`.
    pub fn finish(&mut self) {
        self.step(SubmissionPhase::Idle);
    }

    fn step(&mut self, to: SubmissionPhase) {
        let from = self.phase;
        debug_assert!(
            from.can_advance_to(to),
            "illegal submission transition {} -> {}",
            from.name(),
            to.name()
        );
        debug!(from = from.name(), to = to.name(), attempt = self.attempts, "submission phase changed");
        self.phase = to;
    }
}
