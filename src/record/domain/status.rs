//! Maintenance record lifecycle status.

use super::ParseRecordStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a maintenance record.
///
/// The canonical storage and wire representations are the Spanish labels
/// used by the presentation tier (`Pendiente`, `En Progreso`, `Completado`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Maintenance has been recorded but not started.
    #[serde(rename = "Pendiente")]
    Pending,
    /// Maintenance work is underway.
    #[serde(rename = "En Progreso")]
    InProgress,
    /// Maintenance work has finished.
    #[serde(rename = "Completado")]
    Completed,
}

impl RecordStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Progreso",
            Self::Completed => "Completado",
        }
    }
}

impl Default for RecordStatus {
    /// New records start pending unless the caller chooses otherwise.
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RecordStatus {
    type Error = ParseRecordStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pendiente" => Ok(Self::Pending),
            "en progreso" => Ok(Self::InProgress),
            "completado" => Ok(Self::Completed),
            _ => Err(ParseRecordStatusError(value.to_owned())),
        }
    }
}
