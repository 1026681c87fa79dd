//! Repository port for maintenance record persistence and lookup.

use crate::record::domain::{
    MaintenanceRecord, RecordChanges, RecordDraft, RecordId, RecordStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for record repository operations.
pub type RecordRepositoryResult<T> = Result<T, RecordRepositoryError>;

/// Maintenance record persistence contract.
///
/// Absent records are values, not errors: lookups return `None`, updates
/// return `None`, and deletes return `false` when the identifier is unknown.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Stores a new record, assigning a fresh identifier.
    ///
    /// Both timestamps are set to `timestamp`, so the stored record satisfies
    /// `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::Persistence`] when the store rejects
    /// the insert.
    async fn insert(
        &self,
        draft: &RecordDraft,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<MaintenanceRecord>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<MaintenanceRecord>>;

    /// Returns every record ordered by creation timestamp, newest first.
    async fn list_all(&self) -> RecordRepositoryResult<Vec<MaintenanceRecord>>;

    /// Applies the supplied fields to an existing record.
    ///
    /// The update timestamp is rewritten to `timestamp` even when the change
    /// set is empty. Returns the new record state, or `None` when the
    /// identifier does not exist.
    async fn update(
        &self,
        id: RecordId,
        changes: &RecordChanges,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<Option<MaintenanceRecord>>;

    /// Removes a record, reporting whether a row was actually deleted.
    async fn delete(&self, id: RecordId) -> RecordRepositoryResult<bool>;

    /// Returns records for the given equipment, ordered by event date,
    /// newest first.
    async fn list_by_equipment(
        &self,
        equipment: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>>;

    /// Returns records for the given technician, ordered by event date,
    /// newest first.
    async fn list_by_technician(
        &self,
        technician: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>>;

    /// Returns records with the given status, ordered by event date,
    /// newest first.
    async fn list_by_status(
        &self,
        status: RecordStatus,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>>;
}

/// Errors returned by record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordRepositoryError {
    /// A stored row could not be mapped back onto the domain model.
    #[error("invalid persisted record data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordRepositoryError {
    /// Wraps a row-to-domain conversion error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
