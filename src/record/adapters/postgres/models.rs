//! Diesel row models for maintenance record persistence.

use super::schema::maintenance_records;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for maintenance records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintenance_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecordRow {
    /// Store-assigned record identifier.
    pub id: i32,
    /// Equipment label.
    pub equipment: String,
    /// Requesting user.
    pub user: String,
    /// Technician.
    pub technician: String,
    /// Maintenance event date.
    pub date: DateTime<Utc>,
    /// Task descriptions as a JSON array.
    pub tasks: Value,
    /// Lifecycle status label.
    pub status: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for maintenance records.
///
/// The identifier column is absent so the database sequence assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maintenance_records)]
pub struct NewRecordRow {
    /// Equipment label.
    pub equipment: String,
    /// Requesting user.
    pub user: String,
    /// Technician.
    pub technician: String,
    /// Maintenance event date.
    pub date: DateTime<Utc>,
    /// Task descriptions as a JSON array.
    pub tasks: Value,
    /// Lifecycle status label.
    pub status: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial-update model for maintenance records.
///
/// `None` fields are skipped; `notes` uses a nested option so `Some(None)`
/// clears the column. The update timestamp is unconditional, so an update
/// that supplies no field still rewrites it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = maintenance_records)]
pub struct RecordChangesetRow {
    /// Replacement equipment label, if supplied.
    pub equipment: Option<String>,
    /// Replacement requesting user, if supplied.
    pub user: Option<String>,
    /// Replacement technician, if supplied.
    pub technician: Option<String>,
    /// Replacement event date, if supplied.
    pub date: Option<DateTime<Utc>>,
    /// Replacement task array, if supplied.
    pub tasks: Option<Value>,
    /// Replacement status label, if supplied.
    pub status: Option<String>,
    /// Notes change: outer `None` skips, `Some(None)` clears.
    pub notes: Option<Option<String>>,
    /// Update timestamp, always written.
    pub updated_at: DateTime<Utc>,
}
