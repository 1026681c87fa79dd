//! Generative-text backend port.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for generative backend operations.
pub type GenerativeBackendResult<T> = Result<T, GenerativeBackendError>;

/// Contract for a generative-text backend that answers in JSON.
///
/// The backend is a black box: one prompt in, one structured JSON value out.
/// Responses are inherently non-deterministic and must never be treated as
/// ground truth.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends a prompt and returns the backend's JSON reply.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeBackendError::Transport`] when the exchange fails
    /// and [`GenerativeBackendError::MalformedResponse`] when the reply is
    /// not the promised JSON.
    async fn generate_json(&self, prompt: &str) -> GenerativeBackendResult<Value>;
}

/// Errors returned by generative backend implementations.
#[derive(Debug, Clone, Error)]
pub enum GenerativeBackendError {
    /// The request never completed: connection, timeout, or HTTP failure.
    #[error("generative backend transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered, but not with the promised JSON shape.
    #[error("malformed generative backend response: {0}")]
    MalformedResponse(String),
}

impl GenerativeBackendError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
