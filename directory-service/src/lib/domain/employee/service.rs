use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;

/// Domain service implementation for personnel records.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

/// Current time at the precision Postgres `TIMESTAMPTZ` stores (microseconds),
/// so a returned record equals the one read back later.
fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let now = current_timestamp();
        let employee = Employee {
            id: EmployeeId::new(),
            name: command.name,
            role: command.role,
            company: command.company,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(employee).await?;
        tracing::info!(employee_id = %created.id, "Employee created");

        Ok(created)
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let mut employee = self.get_employee(id).await?;

        if command.is_empty() {
            return Ok(employee);
        }

        if let Some(name) = command.name {
            employee.name = name;
        }

        if let Some(role) = command.role {
            employee.role = role;
        }

        if let Some(company) = command.company {
            employee.company = company;
        }

        employee.updated_at = current_timestamp();

        let updated = self.repository.update(employee).await?;
        tracing::info!(employee_id = %updated.id, "Employee updated");

        Ok(updated)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.repository.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");

        Ok(())
    }
}
