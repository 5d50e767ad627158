//! Students repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student, UpdateStudent},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Sqlite>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List students, optionally filtered by a name/code substring
    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Student>> {
        let rows = match q {
            Some(q) => {
                let pattern = format!("%{}%", q.to_lowercase());
                sqlx::query_as::<_, Student>(
                    r#"
                    SELECT * FROM students
                    WHERE LOWER(first_name) LIKE $1
                       OR LOWER(last_name) LIKE $1
                       OR LOWER(code) LIKE $1
                    ORDER BY last_name, first_name
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Student>(
                    "SELECT * FROM students ORDER BY last_name, first_name",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Get student by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::BorrowerNotFound(format!("Student {} not found", id)))
    }

    /// Get student by university code
    pub async fn get_by_code(&self, code: &str) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::BorrowerNotFound(format!("Student {} not found", code)))
    }

    /// Create student
    pub async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (code, first_name, last_name, program, email, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.program)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update student
    pub async fn update(&self, id: i64, data: &UpdateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                program = COALESCE($3, program),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone)
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.program)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BorrowerNotFound(format!("Student {} not found", id)))
    }

    /// Delete student
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::BorrowerNotFound(format!(
                "Student {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Count all students
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
