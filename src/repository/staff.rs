//! Staff repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Sqlite>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List staff members
    pub async fn list(&self, active_only: bool) -> AppResult<Vec<Staff>> {
        let sql = if active_only {
            "SELECT * FROM staff WHERE active = 1 ORDER BY name"
        } else {
            "SELECT * FROM staff ORDER BY name"
        };
        let rows = sqlx::query_as::<_, Staff>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get staff member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Create staff member
    pub async fn create(&self, data: &CreateStaff) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (name, role, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.role)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update staff member
    pub async fn update(&self, id: i64, data: &UpdateStaff) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff
            SET name = COALESCE($1, name),
                role = COALESCE($2, role),
                email = COALESCE($3, email),
                active = COALESCE($4, active)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.role)
        .bind(&data.email)
        .bind(data.active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Delete staff member
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff member {} not found", id)));
        }
        Ok(())
    }
}
