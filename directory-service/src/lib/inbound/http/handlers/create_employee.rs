use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_employee::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::ProfileField;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let Json(body) = body?;

    state
        .employee_service
        .create_employee(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

/// HTTP request body for creating an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    name: String,
    role: String,
    company: String,
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, EmployeeError> {
        let name = ProfileField::new("name", self.name)?;
        let role = ProfileField::new("role", self.role)?;
        let company = ProfileField::new("company", self.company)?;
        Ok(CreateEmployeeCommand::new(name, role, company))
    }
}
