//! Question source adapters

pub mod quiz_file;

pub use quiz_file::{QuizFileSource, QuizFormat, parse_questions};
