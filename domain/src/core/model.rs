//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models known to the chat endpoint (Value Object)
///
/// The resolver uses a large instruction-tuned model to answer and verify,
/// and a small one to distil a short answer out of the large model's prose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama models
    Llama31_70bInstruct,
    Llama31_8bInstruct,
    Llama32_3bInstruct,
    Llama32_1bInstruct,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31_70bInstruct => "Meta-Llama-3.1-70B-Instruct",
            Model::Llama31_8bInstruct => "Meta-Llama-3.1-8B-Instruct",
            Model::Llama32_3bInstruct => "Meta-Llama-3.2-3B-Instruct",
            Model::Llama32_1bInstruct => "Meta-Llama-3.2-1B-Instruct",
            Model::Custom(s) => s,
        }
    }

    /// Default model for answering a question
    pub fn default_answer() -> Model {
        Model::Llama31_70bInstruct
    }

    /// Default model for extracting a short answer from prose
    pub fn default_extraction() -> Model {
        Model::Llama32_3bInstruct
    }

    /// Default model for verifying or validating a chosen answer
    pub fn default_verification() -> Model {
        Model::Llama31_70bInstruct
    }

    /// Check if this is a Llama model
    pub fn is_llama(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default answer model (Llama 3.1 70B)
    fn default() -> Self {
        Model::default_answer()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "Meta-Llama-3.1-70B-Instruct" => Model::Llama31_70bInstruct,
            "Meta-Llama-3.1-8B-Instruct" => Model::Llama31_8bInstruct,
            "Meta-Llama-3.2-3B-Instruct" => Model::Llama32_3bInstruct,
            "Meta-Llama-3.2-1B-Instruct" => Model::Llama32_1bInstruct,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
