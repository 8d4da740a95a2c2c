use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::admin::models::SessionToken;
use crate::inbound::http::router::AppState;

/// Exchange admin credentials for a session token.
///
/// Unknown username and wrong password both yield 401 "Invalid credentials".
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .admin_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub token: String,
    pub expires_in: i64,
}

impl From<SessionToken> for LoginResponseData {
    fn from(session: SessionToken) -> Self {
        Self {
            token: session.token,
            expires_in: session.expires_in,
        }
    }
}
