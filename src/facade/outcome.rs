//! Uniform success/error envelope for facade operations.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outcome of a facade operation.
///
/// Serialises to the envelope the presentation tier consumes:
/// `{"success": true, "data": …}` or `{"success": false, "error": …}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// The operation completed; the payload is the operation's result.
    Success(T),
    /// The operation failed; the message is safe to show to the user.
    Failure(String),
}

impl<T> ActionOutcome<T> {
    /// Reports whether the operation completed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the payload of a successful outcome.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the payload of a success.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the user-visible message of a failed outcome.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }
}

impl<T> Serialize for ActionOutcome<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            Self::Failure(message) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", message)?;
            }
        }
        map.end()
    }
}
