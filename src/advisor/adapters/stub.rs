//! Stub generative backend for tests.

use crate::advisor::ports::{GenerativeBackend, GenerativeBackendError, GenerativeBackendResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// Scripted generative backend.
///
/// Replies are served in queue order; a failing stub rejects every exchange
/// with a transport error. Received prompts are recorded for assertions.
#[derive(Debug, Default)]
pub struct StubGenerativeBackend {
    replies: Mutex<VecDeque<Value>>,
    prompts: Mutex<Vec<String>>,
    failing: bool,
}

impl StubGenerativeBackend {
    /// Creates a stub that serves the given replies in order.
    #[must_use]
    pub fn with_replies(replies: impl IntoIterator<Item = Value>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Creates a stub that fails every exchange with a transport error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Returns the prompts received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeBackendError::Transport`] when the prompt log lock
    /// is poisoned.
    pub fn recorded_prompts(&self) -> GenerativeBackendResult<Vec<String>> {
        let prompts = self
            .prompts
            .lock()
            .map_err(|err| GenerativeBackendError::transport(io::Error::other(err.to_string())))?;
        Ok(prompts.clone())
    }
}

#[async_trait]
impl GenerativeBackend for StubGenerativeBackend {
    async fn generate_json(&self, prompt: &str) -> GenerativeBackendResult<Value> {
        let mut prompts = self
            .prompts
            .lock()
            .map_err(|err| GenerativeBackendError::transport(io::Error::other(err.to_string())))?;
        prompts.push(prompt.to_owned());
        drop(prompts);

        if self.failing {
            return Err(GenerativeBackendError::transport(io::Error::other(
                "stub backend forced failure",
            )));
        }

        let mut replies = self
            .replies
            .lock()
            .map_err(|err| GenerativeBackendError::transport(io::Error::other(err.to_string())))?;
        replies.pop_front().ok_or_else(|| {
            GenerativeBackendError::MalformedResponse("stub backend has no reply queued".to_owned())
        })
    }
}
