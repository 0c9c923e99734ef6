//! Shared utilities for use cases.
//!
//! Contains the oracle guard that applies the per-call timeout and
//! cancellation to every text oracle request issued during resolution.

use crate::ports::text_oracle::{ModelParameters, OracleError, TextOracle};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Text oracle wrapper enforcing a timeout and a cancellation token.
///
/// A timed-out call becomes [`OracleError::Timeout`] and is handled like any
/// other failed call. A cancelled call becomes [`OracleError::Cancelled`]; the
/// in-flight request future is dropped.
pub(crate) struct GuardedOracle {
    inner: Arc<dyn TextOracle>,
    timeout: Option<Duration>,
    cancellation: CancellationToken,
}

impl GuardedOracle {
    pub(crate) fn new(
        inner: Arc<dyn TextOracle>,
        timeout: Option<Duration>,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            inner,
            timeout,
            cancellation,
        }
    }
}

#[async_trait]
impl TextOracle for GuardedOracle {
    async fn ask(&self, prompt: &str, params: &ModelParameters) -> Result<String, OracleError> {
        if self.cancellation.is_cancelled() {
            return Err(OracleError::Cancelled);
        }

        debug!("Oracle request to {} ({} chars)", params.model, prompt.len());
        let call = self.inner.ask(prompt, params);

        let bounded = async {
            match self.timeout {
                Some(timeout) => match tokio::time::timeout(timeout, call).await {
                    Ok(result) => result,
                    Err(_) => Err(OracleError::Timeout(timeout.as_secs())),
                },
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(OracleError::Cancelled),
            result = bounded => result,
        }
    }
}
