//! Prompt templates for the resolution flow

use crate::core::question::Question;

/// Templates for generating prompts at each step of an attempt
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the answer step
    pub fn answer_system() -> &'static str {
        "Be descriptive on how you got your answer. Have your answer be clear though, \
and have it at the top of the text."
    }

    /// User prompt for the answer step: the question and its numbered options
    pub fn answer_query(question: &Question) -> String {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", i + 1, option))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Question: {}\nOptions:\n{}", question.text(), options)
    }

    /// User prompt for distilling a short answer out of the answer prose
    pub fn extraction_prompt(answer_text: &str) -> String {
        format!(
            "Extract the answer from the following text, and only return the answer no other text: {}",
            answer_text
        )
    }

    /// System prompt for yes/no verification
    pub fn verify_system() -> &'static str {
        "You're an AI assistant that helps verify answers. Your response should ALWAYS only be \
'yes' or 'no', no other text."
    }

    /// User prompt asking whether the selected option answers the question
    pub fn verify_prompt(question: &Question, answer: &str) -> String {
        format!(
            "Is this answer correct: {}, for this question: {}? Only return 'yes' or 'no'.",
            answer,
            question.text()
        )
    }

    /// System prompt for correctness classification
    pub fn validate_system(marker: &str) -> String {
        format!(
            "You classify whether a proposed answer to a multiple-choice question is correct. \
Reply with '{}' if it is correct; otherwise explain briefly what is wrong.",
            marker
        )
    }

    /// User prompt asking for a correctness classification of the full answer
    pub fn validate_prompt(question: &Question, answer_text: &str, marker: &str) -> String {
        format!(
            "{}\n\nProposed answer:\n{}\n\nIs the proposed answer correct? Reply '{}' if it is.",
            Self::answer_query(question),
            answer_text,
            marker
        )
    }
}
