//! Partial-update change sets for maintenance records.

use super::draft::required_field;
use super::{RecordDomainError, RecordStatus};
use chrono::{DateTime, Utc};

/// Validated partial update for a maintenance record.
///
/// Every field is optional; only supplied fields are applied. Notes carry
/// three states: leave alone (unset), replace, or clear. Applying a change
/// set always refreshes the record's update timestamp, even when no field
/// is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordChanges {
    equipment: Option<String>,
    user: Option<String>,
    technician: Option<String>,
    date: Option<DateTime<Utc>>,
    tasks: Option<Vec<String>>,
    status: Option<RecordStatus>,
    notes: Option<Option<String>>,
}

impl RecordChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the equipment label.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyEquipment`] when the value is blank
    /// after trimming.
    pub fn with_equipment(mut self, raw: impl Into<String>) -> Result<Self, RecordDomainError> {
        self.equipment = Some(required_field(raw, RecordDomainError::EmptyEquipment)?);
        Ok(self)
    }

    /// Replaces the requesting user.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyUser`] when the value is blank after
    /// trimming.
    pub fn with_user(mut self, raw: impl Into<String>) -> Result<Self, RecordDomainError> {
        self.user = Some(required_field(raw, RecordDomainError::EmptyUser)?);
        Ok(self)
    }

    /// Replaces the technician.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyTechnician`] when the value is blank
    /// after trimming.
    pub fn with_technician(mut self, raw: impl Into<String>) -> Result<Self, RecordDomainError> {
        self.technician = Some(required_field(raw, RecordDomainError::EmptyTechnician)?);
        Ok(self)
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

    /// Reports whether the change set carries no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.equipment.is_none()
            && self.user.is_none()
            && self.technician.is_none()
            && self.date.is_none()
            && self.tasks.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    /// Returns the replacement equipment label, if supplied.
    #[must_use]
    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    /// Returns the replacement user, if supplied.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the replacement technician, if supplied.
    #[must_use]
    pub fn technician(&self) -> Option<&str> {
        self.technician.as_deref()
    }

    /// Returns the replacement date, if supplied.
    #[must_use]
    pub const fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Returns the replacement task sequence, if supplied.
    #[must_use]
    pub fn tasks(&self) -> Option<&[String]> {
        self.tasks.as_deref()
    }

    /// Returns the replacement status, if supplied.
    #[must_use]
    pub const fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    /// Returns the notes change, if supplied: `Some(None)` clears the notes.
    #[must_use]
    pub fn notes(&self) -> Option<Option<&str>> {
        self.notes.as_ref().map(Option::as_deref)
    }
}
