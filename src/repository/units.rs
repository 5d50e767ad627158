//! Room-fixed equipment units repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::UnitStatus,
        equipment::{CreateRoomUnit, RoomUnit, UpdateRoomUnit},
    },
};

#[derive(Clone)]
pub struct UnitsRepository {
    pool: Pool<Sqlite>,
}

impl UnitsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all units
    pub async fn list(&self) -> AppResult<Vec<RoomUnit>> {
        let rows = sqlx::query_as::<_, RoomUnit>("SELECT * FROM room_units ORDER BY code")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List units fixed in a room
    pub async fn list_by_room(&self, room_id: i64) -> AppResult<Vec<RoomUnit>> {
        let rows = sqlx::query_as::<_, RoomUnit>(
            "SELECT * FROM room_units WHERE room_id = $1 ORDER BY code",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get unit by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<RoomUnit> {
        sqlx::query_as::<_, RoomUnit>("SELECT * FROM room_units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Room unit {} not found", id)))
    }

    /// Create unit
    pub async fn create(&self, data: &CreateRoomUnit) -> AppResult<RoomUnit> {
        let row = sqlx::query_as::<_, RoomUnit>(
            r#"
            INSERT INTO room_units (code, room_id, description, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(data.room_id)
        .bind(&data.description)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update unit (the status here is the maintenance flag)
    pub async fn update(&self, id: i64, data: &UpdateRoomUnit) -> AppResult<RoomUnit> {
        sqlx::query_as::<_, RoomUnit>(
            r#"
            UPDATE room_units
            SET description = COALESCE($1, description),
                status = COALESCE($2, status),
                notes = COALESCE($3, notes)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.description)
        .bind(data.status)
        .bind(&data.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ResourceNotFound(format!("Room unit {} not found", id)))
    }

    /// Delete unit
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM room_units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ResourceNotFound(format!(
                "Room unit {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Per-status counts (for the dashboard)
    pub async fn count_by_status(&self) -> AppResult<Vec<(UnitStatus, i64)>> {
        let rows: Vec<(UnitStatus, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM room_units GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
