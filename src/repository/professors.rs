//! Professors repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::professor::{CreateProfessor, Professor, UpdateProfessor},
};

#[derive(Clone)]
pub struct ProfessorsRepository {
    pool: Pool<Sqlite>,
}

impl ProfessorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List professors, optionally filtered by a name substring
    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Professor>> {
        let rows = match q {
            Some(q) => {
                let pattern = format!("%{}%", q.to_lowercase());
                sqlx::query_as::<_, Professor>(
                    r#"
                    SELECT * FROM professors
                    WHERE LOWER(first_name) LIKE $1 OR LOWER(last_name) LIKE $1
                    ORDER BY last_name, first_name
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Professor>(
                    "SELECT * FROM professors ORDER BY last_name, first_name",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Get professor by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Professor> {
        sqlx::query_as::<_, Professor>("SELECT * FROM professors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::BorrowerNotFound(format!("Professor {} not found", id)))
    }

    /// Create professor
    pub async fn create(&self, data: &CreateProfessor) -> AppResult<Professor> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Professor>(
            r#"
            INSERT INTO professors (first_name, last_name, department, email, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.department)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update professor
    pub async fn update(&self, id: i64, data: &UpdateProfessor) -> AppResult<Professor> {
        sqlx::query_as::<_, Professor>(
            r#"
            UPDATE professors
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                department = COALESCE($3, department),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone)
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.department)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BorrowerNotFound(format!("Professor {} not found", id)))
    }

    /// Delete professor
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM professors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::BorrowerNotFound(format!(
                "Professor {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Count all professors
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM professors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
