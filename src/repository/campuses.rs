//! Campuses repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::campus::{Campus, CreateCampus, UpdateCampus},
};

#[derive(Clone)]
pub struct CampusesRepository {
    pool: Pool<Sqlite>,
}

impl CampusesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Campus>> {
        let rows = sqlx::query_as::<_, Campus>("SELECT * FROM campuses ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Campus> {
        sqlx::query_as::<_, Campus>("SELECT * FROM campuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campus {} not found", id)))
    }

    pub async fn create(&self, data: &CreateCampus) -> AppResult<Campus> {
        let row = sqlx::query_as::<_, Campus>(
            "INSERT INTO campuses (name, address) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i64, data: &UpdateCampus) -> AppResult<Campus> {
        sqlx::query_as::<_, Campus>(
            r#"
            UPDATE campuses
            SET name = COALESCE($1, name),
                address = COALESCE($2, address)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campus {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM campuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Campus {} not found", id)));
        }
        Ok(())
    }
}
