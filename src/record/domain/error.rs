//! Error types for record domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain record values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDomainError {
    /// The equipment label is empty after trimming.
    #[error("equipment must not be empty")]
    EmptyEquipment,

    /// The requesting user is empty after trimming.
    #[error("user must not be empty")]
    EmptyUser,

    /// The technician is empty after trimming.
    #[error("technician must not be empty")]
    EmptyTechnician,
}

/// Error returned while parsing record statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown record status: {0}")]
pub struct ParseRecordStatusError(pub String);
