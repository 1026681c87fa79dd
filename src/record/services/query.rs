//! Service layer for maintenance record creation, lookup, and editing.

use crate::record::{
    domain::{
        MaintenanceRecord, RecordChanges, RecordDomainError, RecordDraft, RecordId, RecordStatus,
    },
    ports::{RecordRepository, RecordRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a maintenance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    equipment: String,
    user: String,
    technician: String,
    date: DateTime<Utc>,
    tasks: Vec<String>,
    status: Option<RecordStatus>,
    notes: Option<String>,
}

impl CreateRecordRequest {
    /// Creates a request with the required record fields.
    #[must_use]
    pub fn new(
        equipment: impl Into<String>,
        user: impl Into<String>,
        technician: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            equipment: equipment.into(),
            user: user.into(),
            technician: technician.into(),
            date,
            tasks: Vec::new(),
            status: None,
            notes: None,
        }
    }

    /// Sets the performed tasks, preserving caller order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = String>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Sets the initial lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Request payload for partially updating a maintenance record.
///
/// Only supplied fields are applied; the record's update timestamp is
/// refreshed regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRecordRequest {
    equipment: Option<String>,
    user: Option<String>,
    technician: Option<String>,
    date: Option<DateTime<Utc>>,
    tasks: Option<Vec<String>>,
    status: Option<RecordStatus>,
    notes: Option<Option<String>>,
}

impl UpdateRecordRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the equipment label.
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    /// Replaces the requesting user.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Replaces the technician.
    #[must_use]
    pub fn with_technician(mut self, technician: impl Into<String>) -> Self {
        self.technician = Some(technician.into());
        self
    }

    /// Replaces the maintenance event date.
    #[must_use]
    pub const fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Replaces the task sequence, preserving caller order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = String>) -> Self {
        self.tasks = Some(tasks.into_iter().collect());
        self
    }

    /// Replaces the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    /// Clears the free-form notes.
    #[must_use]
    pub fn with_notes_cleared(mut self) -> Self {
        self.notes = Some(None);
        self
    }
}

/// Service-level errors for record query operations.
#[derive(Debug, Error)]
pub enum RecordQueryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RecordDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
}

/// Result type for record query service operations.
pub type RecordQueryResult<T> = Result<T, RecordQueryError>;

/// Maintenance record orchestration service.
///
/// Owns timestamp assignment: creation reads the clock once so both
/// timestamps match, and every update stamps the current clock time.
#[derive(Clone)]
pub struct RecordQueryService<R, C>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> RecordQueryService<R, C>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new record query service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new maintenance record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create(
        &self,
        request: CreateRecordRequest,
    ) -> RecordQueryResult<MaintenanceRecord> {
        let mut draft = RecordDraft::new(
            request.equipment,
            request.user,
            request.technician,
            request.date,
        )?;
        draft = draft.with_tasks(request.tasks);
        if let Some(status) = request.status {
            draft = draft.with_status(status);
        }
        if let Some(notes) = request.notes {
            draft = draft.with_notes(notes);
        }

        let timestamp = self.clock.utc();
        let record = self.repository.insert(&draft, timestamp).await?;
        Ok(record)
    }

    /// Retrieves a record by identifier.
    ///
    /// Returns `Ok(None)` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence lookup
    /// fails.
    pub async fn get(&self, id: RecordId) -> RecordQueryResult<Option<MaintenanceRecord>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every record, newest creation first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> RecordQueryResult<Vec<MaintenanceRecord>> {
        Ok(self.repository.list_all().await?)
    }

    /// Partially updates a record, refreshing its update timestamp.
    ///
    /// Returns `Ok(None)` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError`] when a supplied field fails validation or
    /// the repository rejects the update.
    pub async fn update(
        &self,
        id: RecordId,
        request: UpdateRecordRequest,
    ) -> RecordQueryResult<Option<MaintenanceRecord>> {
        let mut changes = RecordChanges::new();
        if let Some(equipment) = request.equipment {
            changes = changes.with_equipment(equipment)?;
        }
        if let Some(user) = request.user {
            changes = changes.with_user(user)?;
        }
        if let Some(technician) = request.technician {
            changes = changes.with_technician(technician)?;
        }
        if let Some(date) = request.date {
            changes = changes.with_date(date);
        }
        if let Some(tasks) = request.tasks {
            changes = changes.with_tasks(tasks);
        }
        if let Some(status) = request.status {
            changes = changes.with_status(status);
        }
        if let Some(notes) = request.notes {
            changes = match notes {
                Some(value) => changes.with_notes(value),
                None => changes.with_notes_cleared(),
            };
        }

        let timestamp = self.clock.utc();
        Ok(self.repository.update(id, &changes, timestamp).await?)
    }

    /// Deletes a record, reporting whether a row was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence rejects the
    /// delete.
    pub async fn delete(&self, id: RecordId) -> RecordQueryResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists records for the given equipment, newest event first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_by_equipment(
        &self,
        equipment: &str,
    ) -> RecordQueryResult<Vec<MaintenanceRecord>> {
        Ok(self.repository.list_by_equipment(equipment).await?)
    }

    /// Lists records for the given technician, newest event first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_by_technician(
        &self,
        technician: &str,
    ) -> RecordQueryResult<Vec<MaintenanceRecord>> {
        Ok(self.repository.list_by_technician(technician).await?)
    }

    /// Lists records with the given status, newest event first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordQueryError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_by_status(
        &self,
        status: RecordStatus,
    ) -> RecordQueryResult<Vec<MaintenanceRecord>> {
        Ok(self.repository.list_by_status(status).await?)
    }
}
