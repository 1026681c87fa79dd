//! Relevance verdicts produced by the task advisor.

use serde::{Deserialize, Serialize};

/// Explanation used when the backend could not complete a relevance check.
const UNAVAILABLE_EXPLANATION: &str = "Could not check relevance due to an error.";

/// Verdict on whether a task description matches its equipment context.
///
/// Serialises with the camel-case field names the presentation tier and the
/// generative backend use (`isRelevant` / `relevanceExplanation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    #[serde(rename = "isRelevant")]
    is_relevant: bool,
    #[serde(rename = "relevanceExplanation")]
    explanation: String,
}

impl RelevanceVerdict {
    /// Creates a verdict from a backend judgement.
    #[must_use]
    pub fn new(is_relevant: bool, explanation: impl Into<String>) -> Self {
        Self {
            is_relevant,
            explanation: explanation.into(),
        }
    }

    /// Returns the degraded default used when the backend fails.
    ///
    /// The task is judged not relevant and the explanation states that the
    /// check could not be completed.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(false, UNAVAILABLE_EXPLANATION)
    }

    /// Reports whether the task was judged relevant.
    #[must_use]
    pub const fn is_relevant(&self) -> bool {
        self.is_relevant
    }

    /// Returns the natural-language justification for the verdict.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
