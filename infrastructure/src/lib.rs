//! Infrastructure layer for quiz-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod oracle;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileModelsConfig, FileOracleConfig, FileOutputConfig,
    FileResolverConfig,
};
pub use oracle::{HttpTextOracle, OracleSettings};
pub use source::{QuizFileSource, QuizFormat};
