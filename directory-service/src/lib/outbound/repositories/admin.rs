use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::AdminId;
use crate::domain::admin::models::Username;
use crate::domain::admin::ports::AdminRepository;

pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AdminRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = AdminError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: AdminId(row.id),
            username: Username::new(row.username)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn create(&self, admin: Admin) -> Result<Admin, AdminError> {
        sqlx::query(
            r#"
            INSERT INTO admins (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(admin.id.0)
        .bind(admin.username.as_str())
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("admins_username_key")
                {
                    return AdminError::UsernameAlreadyExists(admin.username.as_str().to_string());
                }
            }
            AdminError::DatabaseError(e.to_string())
        })?;

        Ok(admin)
    }

    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, AdminError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM admins
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        row.map(Admin::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Admin>, AdminError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        row.map(Admin::try_from).transpose()
    }

    async fn update_password_hash(
        &self,
        id: &AdminId,
        password_hash: &str,
    ) -> Result<(), AdminError> {
        let result = sqlx::query(
            r#"
            UPDATE admins
            SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdminError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
