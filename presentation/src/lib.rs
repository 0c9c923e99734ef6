//! Presentation layer for quiz-quorum
//!
//! This crate contains the CLI definition, report formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{AcceptanceArg, Cli, ExtractionArg, OutputArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
