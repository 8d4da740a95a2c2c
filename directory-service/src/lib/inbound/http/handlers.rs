use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::domain::admin::errors::AdminError;
use crate::domain::employee::errors::EmployeeError;

pub mod change_password;
pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod health;
pub mod list_employees;
pub mod login;
pub mod update_employee;

/// Successful response: status plus a JSON body serialized as-is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Body of confirmation responses (`{ "message": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error responses, rendered as `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// Log the detail server-side and return a response that carries none of it.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Request failed with internal error");
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

/// Unreadable request bodies keep the `{ "error": ... }` shape: schema
/// mismatches are 422, everything else (bad syntax, wrong content type) is 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity(message),
            _ => ApiError::BadRequest(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AdminError::IncorrectOldPassword => ApiError::BadRequest(err.to_string()),
            AdminError::NotFound(_) => ApiError::NotFound("Admin not found".to_string()),
            AdminError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AdminError::InvalidAdminId(_)
            | AdminError::InvalidUsername(_)
            | AdminError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            AdminError::Credential(_)
            | AdminError::TokenIssuance(_)
            | AdminError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::InvalidEmployeeId(_) => ApiError::BadRequest(err.to_string()),
            EmployeeError::InvalidField(_) => ApiError::UnprocessableEntity(err.to_string()),
            EmployeeError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}
