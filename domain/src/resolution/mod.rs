//! Per-question resolution state
//!
//! Tracks the bounded retry cycle for one question and the outcome it ends in.
//!
//! ```text
//!   Pending ──begin_attempt──▶ Attempting ──resolve──▶ Resolved
//!                                 │   ▲
//!                 record_failure  │   │ attempts remain
//!                                 ▼   │
//!                              (retry)┘──attempts used up──▶ Exhausted
//! ```

pub mod outcome;
pub mod state;

pub use outcome::{AttemptFailure, AttemptRecord, QuestionOutcome, UnresolvedReason};
pub use state::{AttemptState, ResolutionState};
