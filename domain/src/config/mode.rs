//! Resolution strategy selectors
//!
//! - [`ExtractionMode`]: what text is fed to the best-match selector
//! - [`AcceptanceMode`]: how a matched option is confirmed before selection

use serde::{Deserialize, Serialize};

/// Which text the best-match selector compares against the options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// Ask a second (small) model to return only the answer (default)
    #[default]
    SeparateCall,
    /// Use the full answer text as-is
    None,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractionMode::SeparateCall => "separate-call",
            ExtractionMode::None => "none",
        }
    }

    pub fn valid_values() -> &'static [&'static str] {
        &["separate-call", "none"]
    }
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "separate-call" | "separate" | "extract" => Ok(ExtractionMode::SeparateCall),
            "none" | "full" | "full-text" => Ok(ExtractionMode::None),
            other => Err(format!("unknown extraction mode '{}'", other)),
        }
    }
}

/// How a matched option is confirmed before it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcceptanceMode {
    /// Separate yes/no verification call about the selected option (default)
    #[default]
    Verify,
    /// Correctness classification of the full answer, checked for a marker
    Validate,
}

impl AcceptanceMode {
    pub fn as_str(&self) -> &str {
        match self {
            AcceptanceMode::Verify => "verify",
            AcceptanceMode::Validate => "validate",
        }
    }

    pub fn valid_values() -> &'static [&'static str] {
        &["verify", "validate"]
    }
}

impl std::fmt::Display for AcceptanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AcceptanceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verify" | "verify-then-accept" => Ok(AcceptanceMode::Verify),
            "validate" | "validate-then-accept" => Ok(AcceptanceMode::Validate),
            other => Err(format!("unknown acceptance mode '{}'", other)),
        }
    }
}
