//! Quiz file question source
//!
//! Reads questions from a JSON or TOML file and records selections in memory.
//!
//! # Example
//!
//! ```toml
//! [[questions]]
//! text = "What is the capital of France?"
//! options = ["Paris", "London", "Berlin"]
//! ```
//!
//! The JSON form is `{ "questions": [ { "text": ..., "options": [...] } ] }`.
//! Text and options are trimmed, blank options are dropped, and a missing
//! heading becomes "Unknown Question".

use async_trait::async_trait;
use quiz_application::ports::question_source::{
    QuestionHandle, QuestionSource, SourceError, SourcedQuestion,
};
use quiz_domain::{Question, preview};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// On-disk quiz document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct QuizDocument {
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawQuestion {
    text: Option<String>,
    options: Vec<String>,
}

/// Serialization format of a quiz file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormat {
    Json,
    Toml,
}

impl QuizFormat {
    /// Pick the format from the file extension (`.toml`, anything else is JSON)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => QuizFormat::Toml,
            _ => QuizFormat::Json,
        }
    }
}

/// Parse quiz file contents into normalised questions
pub fn parse_questions(contents: &str, format: QuizFormat) -> Result<Vec<Question>, SourceError> {
    let document: QuizDocument = match format {
        QuizFormat::Json => {
            serde_json::from_str(contents).map_err(|e| SourceError::Parse(e.to_string()))?
        }
        QuizFormat::Toml => toml::from_str(contents).map_err(|e| SourceError::Parse(e.to_string()))?,
    };

    Ok(document
        .questions
        .into_iter()
        .map(|raw| Question::from_raw(raw.text.as_deref(), raw.options))
        .collect())
}

/// [`QuestionSource`] backed by a quiz file
///
/// The file is read on every [`list_questions`](QuestionSource::list_questions)
/// call; selections are validated against the most recent listing.
pub struct QuizFileSource {
    path: PathBuf,
    listed: Mutex<Vec<Question>>,
    selections: Mutex<Vec<(QuestionHandle, usize)>>,
}

impl QuizFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            listed: Mutex::new(Vec::new()),
            selections: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Selections made so far, in order
    pub fn selections(&self) -> Vec<(QuestionHandle, usize)> {
        self.selections
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSource for QuizFileSource {
    async fn list_questions(&self) -> Result<Vec<SourcedQuestion>, SourceError> {
        debug!("Reading quiz file {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let questions = parse_questions(&contents, QuizFormat::from_path(&self.path))?;
        info!(
            "Loaded {} question(s) from {}",
            questions.len(),
            self.path.display()
        );

        let sourced = questions
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, q)| SourcedQuestion::new(QuestionHandle(i), q))
            .collect();

        let mut listed = self
            .listed
            .lock()
            .map_err(|_| SourceError::Unavailable("question cache poisoned".to_string()))?;
        *listed = questions;
        Ok(sourced)
    }

    async fn select_option(
        &self,
        handle: QuestionHandle,
        option_index: usize,
    ) -> Result<(), SourceError> {
        let option = {
            let listed = self
                .listed
                .lock()
                .map_err(|_| SourceError::Unavailable("question cache poisoned".to_string()))?;
            let question = listed
                .get(handle.0)
                .ok_or(SourceError::InvalidHandle(handle))?;
            question
                .option(option_index)
                .ok_or(SourceError::OptionOutOfRange {
                    handle,
                    option_index,
                })?
                .to_string()
        };

        info!("Selected option {} for {}: {}", option_index + 1, handle, preview(&option, 60));
        self.selections
            .lock()
            .map_err(|_| SourceError::Unavailable("selection log poisoned".to_string()))?
            .push((handle, option_index));
        Ok(())
    }
}
