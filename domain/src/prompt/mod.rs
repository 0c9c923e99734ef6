//! Prompt domain
//!
//! Templates for the prompts sent to the text oracle at each step of an attempt.

mod template;

pub use template::PromptTemplate;
