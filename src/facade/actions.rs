//! Maintenance actions exposed to the presentation tier.

use super::ActionOutcome;
use crate::advisor::{
    domain::{ClassifyRelevanceRequest, RelevanceVerdict, SuggestTasksRequest},
    ports::GenerativeBackend,
    services::TaskAdvisor,
};
use crate::config::Vocabulary;
use crate::record::{
    domain::{MaintenanceRecord, RecordDomainError, RecordId},
    ports::RecordRepository,
    services::{
        CreateRecordRequest, RecordQueryError, RecordQueryService, UpdateRecordRequest,
    },
};
use mockable::Clock;

const CREATE_ERROR: &str = "Error al crear el registro de mantenimiento";
const FETCH_ALL_ERROR: &str = "Error al obtener los registros de mantenimiento";
const FETCH_ERROR: &str = "Error al obtener el registro de mantenimiento";
const UPDATE_ERROR: &str = "Error al actualizar el registro de mantenimiento";
const DELETE_ERROR: &str = "Error al eliminar el registro de mantenimiento";

/// Boundary service wrapping record queries and task advisory.
///
/// Every method returns an [`ActionOutcome`]; underlying causes are logged
/// here and replaced by user-visible messages. Advisor operations always
/// succeed, degrading to their safe defaults on blank input exactly as they
/// do on backend failure.
#[derive(Clone)]
pub struct MaintenanceActions<R, C, B>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
    B: GenerativeBackend,
{
    records: RecordQueryService<R, C>,
    advisor: TaskAdvisor<B>,
    vocabulary: Vocabulary,
}

impl<R, C, B> MaintenanceActions<R, C, B>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
    B: GenerativeBackend,
{
    /// Creates the facade over its collaborating services.
    #[must_use]
    pub const fn new(
        records: RecordQueryService<R, C>,
        advisor: TaskAdvisor<B>,
        vocabulary: Vocabulary,
    ) -> Self {
        Self {
            records,
            advisor,
            vocabulary,
        }
    }

    /// Returns the selection lists for the presentation tier.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Suggests maintenance tasks for an equipment type.
    ///
    /// Blank input yields an empty suggestion list, the same degraded value
    /// as a backend failure.
    pub async fn suggest_tasks(&self, equipment_type: &str) -> ActionOutcome<Vec<String>> {
        let request = match SuggestTasksRequest::new(equipment_type) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(error = %error, "task suggestion skipped for blank input");
                return ActionOutcome::Success(Vec::new());
            }
        };
        ActionOutcome::Success(self.advisor.suggest_tasks(&request).await)
    }

    /// Classifies whether a task description fits its equipment context.
    ///
    /// Blank input yields the unavailable verdict, the same degraded value
    /// as a backend failure.
    pub async fn check_task_relevance(
        &self,
        equipment_type: &str,
        software_version: Option<&str>,
        task_description: &str,
    ) -> ActionOutcome<RelevanceVerdict> {
        let mut request = match ClassifyRelevanceRequest::new(equipment_type, task_description) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(error = %error, "relevance check skipped for blank input");
                return ActionOutcome::Success(RelevanceVerdict::unavailable());
            }
        };
        // The domain treats a blank version as absent.
        request = request.with_software_version(software_version.unwrap_or_default());
        ActionOutcome::Success(self.advisor.classify_relevance(&request).await)
    }

    /// Creates a maintenance record.
    pub async fn create_record(
        &self,
        request: CreateRecordRequest,
    ) -> ActionOutcome<MaintenanceRecord> {
        self.records.create(request).await.map_or_else(
            |error| store_failure(&error, CREATE_ERROR),
            ActionOutcome::Success,
        )
    }

    /// Lists every maintenance record, newest creation first.
    pub async fn get_all_records(&self) -> ActionOutcome<Vec<MaintenanceRecord>> {
        self.records.list().await.map_or_else(
            |error| store_failure(&error, FETCH_ALL_ERROR),
            ActionOutcome::Success,
        )
    }

    /// Fetches a maintenance record; an absent identifier is a successful
    /// `None`, not a failure.
    pub async fn get_record_by_id(
        &self,
        id: RecordId,
    ) -> ActionOutcome<Option<MaintenanceRecord>> {
        self.records.get(id).await.map_or_else(
            |error| store_failure(&error, FETCH_ERROR),
            ActionOutcome::Success,
        )
    }

    /// Partially updates a maintenance record; an absent identifier is a
    /// successful `None`, not a failure.
    pub async fn update_record(
        &self,
        id: RecordId,
        request: UpdateRecordRequest,
    ) -> ActionOutcome<Option<MaintenanceRecord>> {
        self.records.update(id, request).await.map_or_else(
            |error| store_failure(&error, UPDATE_ERROR),
            ActionOutcome::Success,
        )
    }

    /// Deletes a maintenance record, reporting whether a row was removed;
    /// deleting an absent identifier is a successful `false`.
    pub async fn delete_record(&self, id: RecordId) -> ActionOutcome<bool> {
        self.records.delete(id).await.map_or_else(
            |error| store_failure(&error, DELETE_ERROR),
            ActionOutcome::Success,
        )
    }
}

/// Converts a service error into a user-visible failure.
///
/// Validation errors carry their own field message; store failures are
/// logged and replaced by the operation's generic message.
fn store_failure<T>(error: &RecordQueryError, operation_message: &str) -> ActionOutcome<T> {
    match error {
        RecordQueryError::Domain(domain) => {
            ActionOutcome::Failure(domain_message(domain).to_owned())
        }
        RecordQueryError::Repository(repository) => {
            tracing::error!(error = %repository, "maintenance record store operation failed");
            ActionOutcome::Failure(operation_message.to_owned())
        }
    }
}

const fn domain_message(error: &RecordDomainError) -> &'static str {
    match error {
        RecordDomainError::EmptyEquipment => "Debe seleccionar un equipo.",
        RecordDomainError::EmptyUser => "Debe seleccionar un usuario.",
        RecordDomainError::EmptyTechnician => "Debe seleccionar un técnico.",
    }
}
