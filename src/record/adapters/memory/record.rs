//! In-memory repository for maintenance record tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::record::{
    domain::{MaintenanceRecord, RecordChanges, RecordDraft, RecordId, RecordStatus},
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult},
};

/// Thread-safe in-memory record repository.
///
/// Mirrors the `PostgreSQL` adapter's contract, including identifier
/// assignment: identifiers increase monotonically and are never reused
/// after a delete.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    state: Arc<RwLock<InMemoryRecordState>>,
}

#[derive(Debug, Default)]
struct InMemoryRecordState {
    records: BTreeMap<i32, MaintenanceRecord>,
    last_id: i32,
}

impl InMemoryRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sorts records by creation timestamp descending, identifier breaking ties.
fn sorted_by_created_desc(mut records: Vec<MaintenanceRecord>) -> Vec<MaintenanceRecord> {
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
    records
}

/// Sorts records by event date descending, identifier breaking ties.
fn sorted_by_date_desc(mut records: Vec<MaintenanceRecord>) -> Vec<MaintenanceRecord> {
    records.sort_by(|a, b| b.date().cmp(&a.date()).then_with(|| b.id().cmp(&a.id())));
    records
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert(
        &self,
        draft: &RecordDraft,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<MaintenanceRecord> {
        let mut state = self.state.write().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state.last_id += 1;
        let record =
            MaintenanceRecord::from_draft(RecordId::new(state.last_id), draft.clone(), timestamp);
        state.records.insert(record.id().value(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<MaintenanceRecord>> {
        let state = self.state.read().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.records.get(&id.value()).cloned())
    }

    async fn list_all(&self) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let state = self.state.read().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_created_desc(
            state.records.values().cloned().collect(),
        ))
    }

    async fn update(
        &self,
        id: RecordId,
        changes: &RecordChanges,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<Option<MaintenanceRecord>> {
        let mut state = self.state.write().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(record) = state.records.get_mut(&id.value()) else {
            return Ok(None);
        };
        record.apply_changes(changes, timestamp);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: RecordId) -> RecordRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.records.remove(&id.value()).is_some())
    }

    async fn list_by_equipment(
        &self,
        equipment: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let state = self.state.read().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_date_desc(
            state
                .records
                .values()
                .filter(|record| record.equipment() == equipment)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_technician(
        &self,
        technician: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let state = self.state.read().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_date_desc(
            state
                .records
                .values()
                .filter(|record| record.technician() == technician)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_status(
        &self,
        status: RecordStatus,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let state = self.state.read().map_err(|err| {
            RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_date_desc(
            state
                .records
                .values()
                .filter(|record| record.status() == status)
                .cloned()
                .collect(),
        ))
    }
}
