use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;

use crate::domain::admin::models::AdminId;
use crate::inbound::http::handlers::ApiError;

const BEARER_SCHEME: &str = "Bearer";

/// Identity decoded from a verified session token, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: AdminId,
    pub username: String,
}

/// Reasons the auth gate turns a request away.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header at all.
    #[error("Access denied. No token provided")]
    Unauthenticated,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedHeader,

    /// Bad signature, malformed token, or expired.
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl From<AuthRejection> for ApiError {
    fn from(rejection: AuthRejection) -> Self {
        ApiError::Unauthorized(rejection.to_string())
    }
}

/// Middleware that validates the bearer token and adds the admin identity to
/// request extensions.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let admin = bearer_token(req.headers())
        .and_then(|token| verify_token(&authenticator, token))
        .map_err(|rejection| {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                reason = %rejection,
                "Request rejected by auth gate"
            );
            rejection
        })?;

    req.extensions_mut().insert(admin);

    Ok(next.run(req).await)
}

/// Extract the raw token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; a bare token without the scheme
/// is rejected.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthRejection::Unauthenticated)?;

    let value = header
        .to_str()
        .map_err(|_| AuthRejection::MalformedHeader)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthRejection::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) || token.is_empty() || token.contains(' ') {
        return Err(AuthRejection::MalformedHeader);
    }

    Ok(token)
}

/// Check signature and expiry and decode the admin identity.
pub fn verify_token(
    authenticator: &Authenticator,
    token: &str,
) -> Result<AuthenticatedAdmin, AuthRejection> {
    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        AuthRejection::InvalidToken
    })?;

    let admin_id = AdminId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not an admin id");
        AuthRejection::InvalidToken
    })?;

    Ok(AuthenticatedAdmin {
        admin_id,
        username: claims.username,
    })
}
