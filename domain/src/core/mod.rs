//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - language model identifiers used for each oracle role
//! - [`question::Question`] - a multiple-choice question with its displayed options
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
