//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_all;
pub mod resolve_question;
pub(crate) mod shared;
