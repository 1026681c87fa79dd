//! Maintenance record aggregate root.

use super::{RecordChanges, RecordDraft, RecordId, RecordStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maintenance record aggregate root.
///
/// Serialises with the camel-case field names the presentation tier
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    id: RecordId,
    equipment: String,
    user: String,
    technician: String,
    date: DateTime<Utc>,
    tasks: Vec<String>,
    status: RecordStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted maintenance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecordData {
    /// Persisted record identifier.
    pub id: RecordId,
    /// Persisted equipment label.
    pub equipment: String,
    /// Persisted requesting user.
    pub user: String,
    /// Persisted technician.
    pub technician: String,
    /// Persisted maintenance event date.
    pub date: DateTime<Utc>,
    /// Persisted task sequence.
    pub tasks: Vec<String>,
    /// Persisted lifecycle status.
    pub status: RecordStatus,
    /// Persisted free-form notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Creates a record from a validated draft and a store-assigned id.
    ///
    /// Creation and update timestamps are both set to `timestamp`, so a
    /// freshly created record always satisfies `created_at == updated_at`.
    #[must_use]
    pub fn from_draft(id: RecordId, draft: RecordDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            equipment: draft.equipment().to_owned(),
            user: draft.user().to_owned(),
            technician: draft.technician().to_owned(),
            date: draft.date(),
            tasks: draft.tasks().to_vec(),
            status: draft.status(),
            notes: draft.notes().map(ToOwned::to_owned),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRecordData) -> Self {
        Self {
            id: data.id,
            equipment: data.equipment,
            user: data.user,
            technician: data.technician,
            date: data.date,
            tasks: data.tasks,
            status: data.status,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the equipment label.
    #[must_use]
    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    /// Returns the requesting user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the technician.
    #[must_use]
    pub fn technician(&self) -> &str {
        &self.technician
    }

    /// Returns the maintenance event date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the performed tasks in caller order.
    #[must_use]
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RecordStatus {
        self.status
    }

    /// Returns the free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the supplied fields and refreshes the update timestamp.
    ///
    /// The update timestamp is rewritten even when the change set is empty.
    pub fn apply_changes(&mut self, changes: &RecordChanges, timestamp: DateTime<Utc>) {
        if let Some(equipment) = changes.equipment() {
            self.equipment = equipment.to_owned();
        }
        if let Some(user) = changes.user() {
            self.user = user.to_owned();
        }
        if let Some(technician) = changes.technician() {
            self.technician = technician.to_owned();
        }
        if let Some(date) = changes.date() {
            self.date = date;
        }
        if let Some(tasks) = changes.tasks() {
            self.tasks = tasks.to_vec();
        }
        if let Some(status) = changes.status() {
            self.status = status;
        }
        if let Some(notes) = changes.notes() {
            self.notes = notes.map(ToOwned::to_owned);
        }
        self.updated_at = timestamp;
    }
}
