//! Application-level configuration.
//!
//! - [`ResolverParams`] - resolution loop control (attempts, strategies, models, timeouts)

pub mod resolver_params;

pub use resolver_params::ResolverParams;
