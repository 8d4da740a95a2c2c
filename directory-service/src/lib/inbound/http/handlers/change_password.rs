use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::admin::errors::AdminError;
use crate::domain::admin::models::ChangePasswordCommand;
use crate::domain::admin::models::Password;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

/// Replace the authenticated admin's password.
///
/// Tokens issued before the change remain valid until they expire; clients
/// should discard theirs and log in again.
pub async fn change_password(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .admin_service
        .change_password(&admin.admin_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("Password updated successfully"),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
}

impl ChangePasswordRequest {
    fn try_into_command(self) -> Result<ChangePasswordCommand, AdminError> {
        let new_password = Password::new(self.new_password)?;
        Ok(ChangePasswordCommand::new(self.old_password, new_password))
    }
}
