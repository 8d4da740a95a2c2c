use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_employee::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::ProfileField;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an employee (raw JSON); omitted fields are kept
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, EmployeeError> {
        let name = self
            .name
            .map(|value| ProfileField::new("name", value))
            .transpose()?;
        let role = self
            .role
            .map(|value| ProfileField::new("role", value))
            .transpose()?;
        let company = self
            .company
            .map(|value| ProfileField::new("company", value))
            .transpose()?;

        Ok(UpdateEmployeeCommand {
            name,
            role,
            company,
        })
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;
    let Json(req) = req?;
    let command = req.try_into_command()?;

    state
        .employee_service
        .update_employee(&employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
