//! Answer matching
//!
//! Pure string-similarity logic that maps a free-text model answer back onto
//! one of a question's displayed options.
//!
//! # Pipeline
//!
//! ```text
//! edit_distance(a, b)          unit-cost Levenshtein distance
//!        ↓
//! similarity(a, b)             case-insensitive, normalised to [0, 1]
//!        ↓
//! select_best(options, text)   highest score wins, first index on ties
//! ```

pub mod distance;
pub mod selector;
pub mod similarity;

pub use distance::edit_distance;
pub use selector::{MatchResult, select_best};
pub use similarity::similarity;
