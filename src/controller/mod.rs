//! Event handling and submission gating.
//!
//! This module is the imperative shell around the pure core: it reads the
//! host form, updates the error map, drives presentation, and runs the
//! submission state machine.
//!
//! # Key Concepts
//!
//! - **Events**: blur, input and submit arrive as [`FormEvent`] commands and
//!   are handled synchronously, one at a time
//! - **Asymmetry**: blur always re-evaluates; input only re-evaluates fields
//!   already shown as invalid
//! - **Gate**: submission moves `Idle -> Validating -> Accepted | Rejected
//!   -> Idle` and never retries on its own

mod engine;
mod event;
mod submission;

pub use engine::{FormValidator, SubmitHandler};
pub use event::{EventOutcome, FormEvent};
pub use submission::{Delivery, SubmissionGate, SubmissionOutcome, SubmissionPhase};
