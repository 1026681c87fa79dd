//! Validated input for creating maintenance records.

use super::{RecordDomainError, RecordStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated creation input for a maintenance record.
///
/// The store assigns the identifier and timestamps; everything else a new
/// record carries comes from the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    equipment: String,
    user: String,
    technician: String,
    date: DateTime<Utc>,
    tasks: Vec<String>,
    status: RecordStatus,
    notes: Option<String>,
}

impl RecordDraft {
    /// Creates a draft with the required fields.
    ///
    /// `equipment`, `user`, and `technician` are trimmed. Tasks default to an
    /// empty sequence and the status defaults to [`RecordStatus::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyEquipment`],
    /// [`RecordDomainError::EmptyUser`], or
    /// [`RecordDomainError::EmptyTechnician`] when the corresponding field is
    /// blank after trimming.
    pub fn new(
        raw_equipment: impl Into<String>,
        raw_user: impl Into<String>,
        raw_technician: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, RecordDomainError> {
        let equipment = required_field(raw_equipment, RecordDomainError::EmptyEquipment)?;
        let user = required_field(raw_user, RecordDomainError::EmptyUser)?;
        let technician = required_field(raw_technician, RecordDomainError::EmptyTechnician)?;

        Ok(Self {
            equipment,
            user,
            technician,
            date,
            tasks: Vec::new(),
            status: RecordStatus::default(),
            notes: None,
        })
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
        self.status = status;
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
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

    /// Returns the initial lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RecordStatus {
        self.status
    }

    /// Returns the free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Trims a required text field, rejecting blank values with the given error.
pub(super) fn required_field(
    raw: impl Into<String>,
    empty_error: RecordDomainError,
) -> Result<String, RecordDomainError> {
    let value = raw.into().trim().to_owned();
    if value.is_empty() {
        return Err(empty_error);
    }
    Ok(value)
}
