use async_trait::async_trait;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::AdminId;
use crate::domain::admin::models::ChangePasswordCommand;
use crate::domain::admin::models::RegisterAdminCommand;
use crate::domain::admin::models::SessionToken;
use crate::domain::admin::models::Username;

/// Port for admin credential and session operations.
#[async_trait]
pub trait AdminServicePort: Send + Sync + 'static {
    /// Register the admin principal with a freshly hashed password.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - A principal with this username exists
    /// * `Credential` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterAdminCommand) -> Result<Admin, AdminError>;

    /// Verify a username/password pair and issue a session token.
    ///
    /// # Arguments
    /// * `username` - Raw username as submitted
    /// * `password` - Plaintext password as submitted
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AdminError>;

    /// Replace the admin's password after re-verifying the current one.
    ///
    /// Tokens already issued stay valid until they expire.
    ///
    /// # Errors
    /// * `NotFound` - Admin does not exist
    /// * `IncorrectOldPassword` - `old_password` does not match
    /// * `Credential` - Hashing failed or the stored digest is malformed
    /// * `DatabaseError` - Database operation failed
    async fn change_password(
        &self,
        id: &AdminId,
        command: ChangePasswordCommand,
    ) -> Result<(), AdminError>;

    /// Retrieve admin by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Admin does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_admin(&self, id: &AdminId) -> Result<Admin, AdminError>;
}

/// Persistence operations for the admin principal (the credential store).
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    /// Persist a new admin.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, admin: Admin) -> Result<Admin, AdminError>;

    /// Retrieve admin by identifier.
    ///
    /// # Returns
    /// Optional admin (None if not found)
    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, AdminError>;

    /// Retrieve admin by username.
    ///
    /// # Returns
    /// Optional admin (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<Admin>, AdminError>;

    /// Atomically replace the stored password digest.
    ///
    /// # Errors
    /// * `NotFound` - Admin does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password_hash(&self, id: &AdminId, password_hash: &str)
        -> Result<(), AdminError>;
}
