use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;

/// Port for personnel record operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// List all employees, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Update provided fields of an existing employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Delete an existing employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for personnel records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// # Returns
    /// Optional employee (None if not found)
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// # Returns
    /// All employees ordered by creation time
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}
