//! Validated request values for advisor operations.

use super::AdvisorDomainError;

/// Validated request for maintenance task suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTasksRequest {
    equipment_type: String,
}

impl SuggestTasksRequest {
    /// Creates a suggestion request for the given equipment type.
    ///
    /// The equipment type is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorDomainError::EmptyEquipmentType`] when the equipment
    /// type is blank after trimming.
    pub fn new(raw_equipment_type: impl Into<String>) -> Result<Self, AdvisorDomainError> {
        Ok(Self {
            equipment_type: required_text(
                raw_equipment_type,
                AdvisorDomainError::EmptyEquipmentType,
            )?,
        })
    }

    /// Returns the equipment type to suggest tasks for.
    #[must_use]
    pub fn equipment_type(&self) -> &str {
        &self.equipment_type
    }
}

/// Validated request for a task relevance classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyRelevanceRequest {
    equipment_type: String,
    software_version: Option<String>,
    task_description: String,
}

impl ClassifyRelevanceRequest {
    /// Creates a classification request for the given equipment and task.
    ///
    /// Both fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorDomainError::EmptyEquipmentType`] or
    /// [`AdvisorDomainError::EmptyTaskDescription`] when the corresponding
    /// field is blank after trimming.
    pub fn new(
        raw_equipment_type: impl Into<String>,
        raw_task_description: impl Into<String>,
    ) -> Result<Self, AdvisorDomainError> {
        Ok(Self {
            equipment_type: required_text(
                raw_equipment_type,
                AdvisorDomainError::EmptyEquipmentType,
            )?,
            software_version: None,
            task_description: required_text(
                raw_task_description,
                AdvisorDomainError::EmptyTaskDescription,
            )?,
        })
    }

    /// Sets the software version context.
    ///
    /// Blank versions are treated as absent.
    #[must_use]
    pub fn with_software_version(mut self, raw_version: impl Into<String>) -> Self {
        let version = raw_version.into().trim().to_owned();
        self.software_version = (!version.is_empty()).then_some(version);
        self
    }

    /// Returns the equipment type the task claims to target.
    #[must_use]
    pub fn equipment_type(&self) -> &str {
        &self.equipment_type
    }

    /// Returns the software version context, if supplied.
    #[must_use]
    pub fn software_version(&self) -> Option<&str> {
        self.software_version.as_deref()
    }

    /// Returns the task description under classification.
    #[must_use]
    pub fn task_description(&self) -> &str {
        &self.task_description
    }
}

fn required_text(
    raw: impl Into<String>,
    empty_error: AdvisorDomainError,
) -> Result<String, AdvisorDomainError> {
    let value = raw.into().trim().to_owned();
    if value.is_empty() {
        return Err(empty_error);
    }
    Ok(value)
}
