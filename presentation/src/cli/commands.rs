//! CLI command definitions

use clap::{Parser, ValueEnum};
use quiz_domain::{AcceptanceMode, ExtractionMode, OutputFormat};
use std::path::PathBuf;

/// Output format for the batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable summary
    Summary,
    /// JSON report
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Summary => OutputFormat::Summary,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// How a matched option is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AcceptanceArg {
    /// Ask a yes/no question about the matched option
    Verify,
    /// Classify the full answer and look for the affirmative marker
    Validate,
}

impl From<AcceptanceArg> for AcceptanceMode {
    fn from(arg: AcceptanceArg) -> Self {
        match arg {
            AcceptanceArg::Verify => AcceptanceMode::Verify,
            AcceptanceArg::Validate => AcceptanceMode::Validate,
        }
    }
}

/// Which text is matched against the options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractionArg {
    /// Ask a small model for the bare answer first
    SeparateCall,
    /// Match the full answer text
    None,
}

impl From<ExtractionArg> for ExtractionMode {
    fn from(arg: ExtractionArg) -> Self {
        match arg {
            ExtractionArg::SeparateCall => ExtractionMode::SeparateCall,
            ExtractionArg::None => ExtractionMode::None,
        }
    }
}

/// CLI arguments for quiz-quorum
#[derive(Parser, Debug)]
#[command(name = "quiz-quorum")]
#[command(author, version, about = "Answer multiple-choice quizzes with a language model")]
#[command(long_about = r#"
Quiz Quorum answers every question of a quiz file with a language model.

For each question:
1. Answer: the model answers the question and its numbered options
2. Extract: a small model distils the bare answer (unless --extraction none)
3. Match: the answer is matched to the closest option by edit distance
4. Accept: the model verifies (or validates) the match before it is selected

A rejected or failed attempt is retried up to --max-attempts times.

Configuration files are loaded from (in priority order):
1. QUIZ_* environment variables (e.g. QUIZ_ORACLE__CREDENTIAL)
2. --config <path>          Explicit config file
3. ./quiz-quorum.toml       Project-level config
4. ~/.config/quiz-quorum/config.toml   Global config

Example:
  quiz-quorum quiz.toml
  quiz-quorum --acceptance validate --max-attempts 3 quiz.json
  quiz-quorum -o json -q quiz.toml > report.json
"#)]
pub struct Cli {
    /// Quiz file (JSON or TOML) to answer
    #[arg(value_name = "QUIZ_FILE", required_unless_present = "show_config")]
    pub quiz_file: Option<PathBuf>,

    /// Maximum attempts per question
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Acceptance strategy
    #[arg(long, value_enum)]
    pub acceptance: Option<AcceptanceArg>,

    /// Answer extraction mode
    #[arg(long, value_enum)]
    pub extraction: Option<ExtractionArg>,

    /// Per-call oracle timeout in seconds (0 disables)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Model answering the questions
    #[arg(long, value_name = "MODEL")]
    pub answer_model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
