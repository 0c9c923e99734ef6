//! Text oracle adapters
//!
//! - [`HttpTextOracle`] - POSTs prompts to the chat relay endpoint

pub mod http;
pub mod protocol;

pub use http::{HttpTextOracle, OracleSettings};
