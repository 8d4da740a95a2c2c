use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::ProfileFieldError;

/// Personnel record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: ProfileField,
    pub role: ProfileField,
    pub company: ProfileField,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    /// Generate a new random employee ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an employee ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        Uuid::parse_str(s)
            .map(EmployeeId)
            .map_err(|e| EmployeeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required free-text attribute of an employee (name, role or company).
///
/// Trimmed, non-blank, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField(String);

impl ProfileField {
    const MAX_LENGTH: usize = 128;

    /// # Arguments
    /// * `field` - Attribute name used in error messages
    /// * `value` - Raw value
    ///
    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `TooLong` - Longer than 128 characters after trimming
    pub fn new(field: &'static str, value: String) -> Result<Self, ProfileFieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProfileFieldError::Blank { field });
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ProfileFieldError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new employee with validated fields
#[derive(Debug)]
pub struct CreateEmployeeCommand {
    pub name: ProfileField,
    pub role: ProfileField,
    pub company: ProfileField,
}

impl CreateEmployeeCommand {
    pub fn new(name: ProfileField, role: ProfileField, company: ProfileField) -> Self {
        Self {
            name,
            role,
            company,
        }
    }
}

/// Command to update an existing employee.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand {
    pub name: Option<ProfileField>,
    pub role: Option<ProfileField>,
    pub company: Option<ProfileField>,
}

impl UpdateEmployeeCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.company.is_none()
    }
}
