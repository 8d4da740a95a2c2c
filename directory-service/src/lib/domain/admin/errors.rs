use thiserror::Error;

/// Error for AdminId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must not be empty")]
    Empty,
}

/// Top-level error for admin credential and session operations
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    #[error("Invalid admin ID: {0}")]
    InvalidAdminId(#[from] AdminIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    /// Unknown username or wrong password; the two are never distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Incorrect old password")]
    IncorrectOldPassword,

    #[error("Admin not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Credential processing failed: {0}")]
    Credential(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
