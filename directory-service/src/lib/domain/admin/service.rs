use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::AdminId;
use crate::domain::admin::models::ChangePasswordCommand;
use crate::domain::admin::models::RegisterAdminCommand;
use crate::domain::admin::models::SessionToken;
use crate::domain::admin::models::Username;
use crate::domain::admin::ports::AdminRepository;
use crate::domain::admin::ports::AdminServicePort;

/// Domain service implementation for admin credential operations.
///
/// Login consults the repository and the authenticator; the service itself
/// holds no mutable state.
pub struct AdminService<AR>
where
    AR: AdminRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
    // Verified against on unknown usernames so both failure paths hash once.
    decoy_hash: OnceLock<Option<String>>,
}

impl<AR> AdminService<AR>
where
    AR: AdminRepository,
{
    /// Create a new admin service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            decoy_hash: OnceLock::new(),
        }
    }

    fn burn_decoy_verification(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_init(|| self.authenticator.hash_password("decoy-password").ok());

        if let Some(hash) = decoy {
            let _ = self.authenticator.verify_password(password, hash);
        }
    }
}

#[async_trait]
impl<AR> AdminServicePort for AdminService<AR>
where
    AR: AdminRepository,
{
    async fn register(&self, command: RegisterAdminCommand) -> Result<Admin, AdminError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| AdminError::Credential(e.to_string()))?;

        let admin = Admin {
            id: AdminId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(admin).await?;
        tracing::info!(admin_id = %created.id, username = %created.username, "Admin registered");

        Ok(created)
    }

    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AdminError> {
        let admin = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(admin) = admin else {
            self.burn_decoy_verification(password);
            tracing::warn!("Login rejected: invalid credentials");
            return Err(AdminError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                password,
                &admin.password_hash,
                &admin.id.to_string(),
                admin.username.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!("Login rejected: invalid credentials");
                    AdminError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(admin_id = %admin.id, error = %err, "Stored password hash is unusable");
                    AdminError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => AdminError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(admin_id = %admin.id, "Admin logged in");

        Ok(SessionToken {
            token: result.access_token,
            expires_in: result.expires_in,
        })
    }

    async fn change_password(
        &self,
        id: &AdminId,
        command: ChangePasswordCommand,
    ) -> Result<(), AdminError> {
        let admin = self.get_admin(id).await?;

        let matches = self
            .authenticator
            .verify_password(&command.old_password, &admin.password_hash)
            .map_err(|e| AdminError::Credential(e.to_string()))?;

        if !matches {
            tracing::warn!(admin_id = %id, "Password change rejected: incorrect old password");
            return Err(AdminError::IncorrectOldPassword);
        }

        let password_hash = self
            .authenticator
            .hash_password(command.new_password.as_str())
            .map_err(|e| AdminError::Credential(e.to_string()))?;

        self.repository
            .update_password_hash(id, &password_hash)
            .await?;
        tracing::info!(admin_id = %id, "Admin password changed");

        Ok(())
    }

    async fn get_admin(&self, id: &AdminId) -> Result<Admin, AdminError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AdminError::NotFound(id.to_string()))
    }
}
