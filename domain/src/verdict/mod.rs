//! Verdict parsing for answer acceptance.
//!
//! These functions turn free-form model replies into accept/reject decisions.
//! They are pure domain logic with no I/O.
//!
//! | Function | Used by | Rule |
//! |----------|---------|------|
//! | [`decide_yes_no`] | verify-then-accept | closer to "yes" than to "no" (ties → yes) |
//! | [`signals_affirmative`] | validate-then-accept | contains the affirmative marker |

pub mod marker;
pub mod outcome;
pub mod yes_no;

pub use marker::{DEFAULT_AFFIRMATIVE_MARKER, signals_affirmative};
pub use outcome::{RejectReason, Verdict};
pub use yes_no::{decide_yes_no, decide_yes_no_response};
