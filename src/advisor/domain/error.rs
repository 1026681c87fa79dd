//! Error types for advisor domain validation.

use thiserror::Error;

/// Errors returned while constructing advisor request values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdvisorDomainError {
    /// The equipment type is empty after trimming.
    #[error("equipment type must not be empty")]
    EmptyEquipmentType,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,
}
