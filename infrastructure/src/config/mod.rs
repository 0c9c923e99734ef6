//! Configuration file loading for quiz-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz-quorum.toml` or `./.quiz-quorum.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quiz-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, FileConfig, FileModelsConfig, FileOracleConfig, FileOutputConfig,
    FileResolverConfig,
};
pub use loader::ConfigLoader;
