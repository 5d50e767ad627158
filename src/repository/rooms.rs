//! Rooms repository for database operations
//!
//! Room occupancy is never stored. Every status read evaluates the open-loan
//! EXISTS predicate over both room loan tables, so no write path can
//! desynchronize it.

use sqlx::{FromRow, Pool, Row, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RoomStatus,
        room::{CreateRoom, Room, RoomWithStatus, UpdateRoom},
    },
};

/// Occupancy predicate shared by every room status read
const OCCUPIED_SQL: &str = "(EXISTS(SELECT 1 FROM room_student_loans l \
                            WHERE l.room_id = r.id AND l.exit_time IS NULL) \
                            OR EXISTS(SELECT 1 FROM room_professor_loans l \
                            WHERE l.room_id = r.id AND l.exit_time IS NULL))";

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Sqlite>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all rooms with their derived status
    pub async fn list(&self) -> AppResult<Vec<RoomWithStatus>> {
        let sql = format!(
            "SELECT r.*, {} as occupied FROM rooms r ORDER BY r.code",
            OCCUPIED_SQL
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let occupied: bool = row.get("occupied");
            result.push(RoomWithStatus {
                room: Room::from_row(&row)?,
                status: if occupied {
                    RoomStatus::Occupied
                } else {
                    RoomStatus::Available
                },
            });
        }
        Ok(result)
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Room {} not found", id)))
    }

    /// Get room by internal code
    pub async fn get_by_code(&self, code: &str) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Room {} not found", code)))
    }

    /// Derived availability: a room is available iff no open loan references it
    pub async fn is_available(&self, room_id: i64) -> AppResult<bool> {
        let sql = format!("SELECT {} FROM rooms r WHERE r.id = $1", OCCUPIED_SQL);
        let occupied: bool = sqlx::query_scalar(&sql)
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Room {} not found", room_id)))?;
        Ok(!occupied)
    }

    /// Create room
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (code, name, campus_id, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.campus_id)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    /// Update room (absent fields keep their value)
    pub async fn update(&self, id: i64, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET code = COALESCE($1, code),
                name = COALESCE($2, name),
                campus_id = COALESCE($3, campus_id),
                notes = COALESCE($4, notes)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.campus_id)
        .bind(&data.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ResourceNotFound(format!("Room {} not found", id)))
    }

    /// Delete room
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ResourceNotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }

    /// Count all rooms
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count currently occupied rooms (for the dashboard)
    pub async fn count_occupied(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM rooms r WHERE {}", OCCUPIED_SQL);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
