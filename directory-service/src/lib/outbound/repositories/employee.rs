use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::ProfileField;
use crate::domain::employee::ports::EmployeeRepository;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    role: String,
    company: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId(row.id),
            name: ProfileField::new("name", row.name)?,
            role: ProfileField::new("role", row.role)?,
            company: ProfileField::new("company", row.company)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, name, role, company, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.name.as_str())
        .bind(employee.role.as_str())
        .bind(employee.company.as_str())
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, role, company, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, role, company, created_at, updated_at
            FROM employees
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, role = $3, company = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.name.as_str())
        .bind(employee.role.as_str())
        .bind(employee.company.as_str())
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee.id.to_string()));
        }

        Ok(employee)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
