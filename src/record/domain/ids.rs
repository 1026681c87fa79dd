//! Identifier types for the record domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a maintenance record.
///
/// Identifiers are allocated by the record store at insertion time and are
/// never reused, even after the identified record has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

impl RecordId {
    /// Creates a record identifier from a store-assigned value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
