//! Equipment repository for database operations
//!
//! The stored status column is only ever flipped by the loans repository
//! (checkout/return/delete compensation) or by the out-of-band `set_status`
//! below. Nothing else writes it.

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all equipment, optionally filtered by status
    pub async fn list(&self, status: Option<EquipmentStatus>) -> AppResult<Vec<Equipment>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, Equipment>(
                    "SELECT * FROM equipment WHERE status = $1 ORDER BY code",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY code")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Equipment {} not found", id)))
    }

    /// Get equipment by inventory code
    pub async fn get_by_code(&self, code: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Equipment {} not found", code)))
    }

    /// Create equipment (new items start available)
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (code, name, brand, model, status, notes, created_at)
            VALUES ($1, $2, $3, $4, 'available', $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update descriptive fields (status has its own paths)
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.code, "code");
        add_field!(data.name, "name");
        add_field!(data.brand, "brand");
        add_field!(data.model, "model");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.code);
        bind_field!(data.name);
        bind_field!(data.brand);
        bind_field!(data.model);
        bind_field!(data.notes);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ResourceNotFound(format!(
                "Equipment {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Unconditional status write: the out-of-band damaged mark and its
    /// manual clear. Legal at any time, including while a loan is open.
    pub async fn set_status(&self, id: i64, status: EquipmentStatus) -> AppResult<Equipment> {
        let now = Utc::now();
        sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ResourceNotFound(format!("Equipment {} not found", id)))
    }

    /// Per-status counts (for the dashboard)
    pub async fn count_by_status(&self) -> AppResult<Vec<(EquipmentStatus, i64)>> {
        let rows: Vec<(EquipmentStatus, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM equipment GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count all equipment
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
