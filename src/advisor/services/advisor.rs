//! Task advisory service over a generative backend.

use crate::advisor::{
    domain::{ClassifyRelevanceRequest, RelevanceVerdict, SuggestTasksRequest},
    ports::{GenerativeBackend, GenerativeBackendError},
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Task advisory service.
///
/// Both operations are infallible by contract: the advisor is assistive, not
/// required, so any template, transport, or parse failure degrades to a safe
/// default instead of failing the enclosing workflow. The degraded branch is
/// explicit and logged at `warn`.
#[derive(Clone)]
pub struct TaskAdvisor<B>
where
    B: GenerativeBackend,
{
    backend: Arc<B>,
}

/// Failures absorbed inside the advisor before degradation.
#[derive(Debug, Error)]
enum AdvisorCallError {
    #[error("prompt rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Backend(#[from] GenerativeBackendError),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(#[from] serde_json::Error),
}

/// Reply shape expected from the suggestion prompt.
#[derive(Debug, Deserialize)]
struct SuggestedTasksReply {
    tasks: Vec<String>,
}

impl<B> TaskAdvisor<B>
where
    B: GenerativeBackend,
{
    /// Creates a task advisor over the given backend.
    #[must_use]
    pub const fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Suggests maintenance tasks for the requested equipment type.
    ///
    /// Returns an empty list when the backend fails; the caller cannot
    /// distinguish "no suggestions" from "backend unavailable", and does not
    /// need to.
    pub async fn suggest_tasks(&self, request: &SuggestTasksRequest) -> Vec<String> {
        self.request_suggestions(request).await.unwrap_or_else(|error| {
            tracing::warn!(
                equipment_type = request.equipment_type(),
                error = %error,
                "task suggestion degraded to an empty list",
            );
            Vec::new()
        })
    }

    /// Classifies whether the described task is relevant to its context.
    ///
    /// Returns [`RelevanceVerdict::unavailable`] when the backend fails: not
    /// relevant, with an explanation stating the check could not be
    /// completed.
    pub async fn classify_relevance(&self, request: &ClassifyRelevanceRequest) -> RelevanceVerdict {
        self.request_verdict(request).await.unwrap_or_else(|error| {
            tracing::warn!(
                equipment_type = request.equipment_type(),
                error = %error,
                "relevance check degraded to the unavailable verdict",
            );
            RelevanceVerdict::unavailable()
        })
    }

    async fn request_suggestions(
        &self,
        request: &SuggestTasksRequest,
    ) -> Result<Vec<String>, AdvisorCallError> {
        let prompt = prompts::suggest_tasks(request)?;
        let value = self.backend.generate_json(&prompt).await?;
        let reply: SuggestedTasksReply = serde_json::from_value(value)?;
        Ok(reply.tasks)
    }

    async fn request_verdict(
        &self,
        request: &ClassifyRelevanceRequest,
    ) -> Result<RelevanceVerdict, AdvisorCallError> {
        let prompt = prompts::classify_relevance(request)?;
        let value = self.backend.generate_json(&prompt).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Prompt templates for the generative backend.
///
/// Each template spells out the exact JSON reply shape, since the backend is
/// asked for a JSON response with no schema injection of its own.
mod prompts {
    use crate::advisor::domain::{ClassifyRelevanceRequest, SuggestTasksRequest};
    use minijinja::Environment;
    use serde_json::{Map, Value};

    const SUGGEST_TASKS_TEMPLATE: &str = "\
You are an expert maintenance technician. Based on the equipment type \
provided, generate a list of common maintenance tasks.

Equipment Type: {{ equipment_type }}

Reply with a JSON object of the form {\"tasks\": [\"task\", ...]} and \
nothing else.";

    const CLASSIFY_RELEVANCE_TEMPLATE: &str = "\
You are an AI assistant that classifies the relevance of maintenance tasks \
based on the equipment type, software version (if applicable), and task \
description.

Determine if the task is relevant to the equipment or software and provide \
a brief explanation.

Equipment Type: {{ equipment_type }}
{% if software_version %}Software Version: {{ software_version }}
{% endif %}Task Description: {{ task_description }}

Reply with a JSON object of the form {\"isRelevant\": true|false, \
\"relevanceExplanation\": \"reason\"} and nothing else.";

    /// Renders the task suggestion prompt.
    pub(super) fn suggest_tasks(request: &SuggestTasksRequest) -> Result<String, minijinja::Error> {
        let mut context = Map::new();
        context.insert(
            "equipment_type".to_owned(),
            Value::String(request.equipment_type().to_owned()),
        );
        render(SUGGEST_TASKS_TEMPLATE, context)
    }

    /// Renders the relevance classification prompt.
    ///
    /// The software version line is rendered only when a version was
    /// supplied.
    pub(super) fn classify_relevance(
        request: &ClassifyRelevanceRequest,
    ) -> Result<String, minijinja::Error> {
        let mut context = Map::new();
        context.insert(
            "equipment_type".to_owned(),
            Value::String(request.equipment_type().to_owned()),
        );
        context.insert(
            "software_version".to_owned(),
            request
                .software_version()
                .map_or(Value::Null, |version| Value::String(version.to_owned())),
        );
        context.insert(
            "task_description".to_owned(),
            Value::String(request.task_description().to_owned()),
        );
        render(CLASSIFY_RELEVANCE_TEMPLATE, context)
    }

    fn render(template: &str, context: Map<String, Value>) -> Result<String, minijinja::Error> {
        let environment = Environment::new();
        environment.render_str(template, context)
    }
}
