//! Loans repository for database operations
//!
//! Single enforcement point for the availability lifecycle. Every
//! multi-statement transition (checkout, return, delete) runs in one
//! transaction, and the equipment status flip is an atomic conditional
//! update checked via rows-affected, so there is no check-then-act window
//! between reading a status and claiming it.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Row, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::LoanKind,
        loan::{EquipmentLoan, EquipmentLoanDetails, LoanRef, ReturnLoan, RoomLoan, RoomLoanDetails},
    },
};

/// Borrower FK column for a loan kind
fn borrower_col(kind: LoanKind) -> &'static str {
    match kind {
        LoanKind::RoomStudent | LoanKind::EquipmentStudent => "student_id",
        LoanKind::RoomProfessor | LoanKind::EquipmentProfessor => "professor_id",
    }
}

/// Resource FK column for a loan kind
fn resource_col(kind: LoanKind) -> &'static str {
    if kind.is_room() {
        "room_id"
    } else {
        "equipment_id"
    }
}

/// Open timestamp column for a loan kind
fn open_col(kind: LoanKind) -> &'static str {
    if kind.is_room() {
        "entry_time"
    } else {
        "delivery_time"
    }
}

/// Close timestamp column for a loan kind; null while the loan is open
fn close_col(kind: LoanKind) -> &'static str {
    if kind.is_room() {
        "exit_time"
    } else {
        "return_time"
    }
}

/// Fields common to every checkout insert
pub struct CheckoutRecord {
    pub resource_id: i64,
    pub borrower_id: i64,
    pub supervisor_id: i64,
    pub assistant_id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Record a room checkout. The occupancy check and the insert share one
    /// transaction; rooms have no stored status to claim, so the EXISTS
    /// predicate inside the transaction is the whole guard.
    pub async fn checkout_room(
        &self,
        kind: LoanKind,
        room_code: &str,
        record: &CheckoutRecord,
    ) -> AppResult<LoanRef> {
        debug_assert!(kind.is_room());
        let mut tx = self.pool.begin().await?;

        let occupied: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM room_student_loans
                          WHERE room_id = $1 AND exit_time IS NULL)
                OR EXISTS(SELECT 1 FROM room_professor_loans
                          WHERE room_id = $1 AND exit_time IS NULL)
            "#,
        )
        .bind(record.resource_id)
        .fetch_one(&mut *tx)
        .await?;

        if occupied {
            return Err(AppError::ResourceNotAvailable(format!(
                "Room {} is occupied",
                room_code
            )));
        }

        let id = self.insert_loan(&mut tx, kind, record).await?;
        tx.commit().await?;

        Ok(LoanRef { kind, id })
    }

    /// Record an equipment hand-out. The status flip is the availability
    /// claim: zero rows affected means the item was not available (in use or
    /// damaged), and nothing is inserted.
    pub async fn checkout_equipment(
        &self,
        kind: LoanKind,
        equipment_code: &str,
        record: &CheckoutRecord,
    ) -> AppResult<LoanRef> {
        debug_assert!(kind.is_equipment());
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            r#"
            UPDATE equipment SET status = 'in_use', updated_at = $1
            WHERE id = $2 AND status = 'available'
            "#,
        )
        .bind(record.timestamp)
        .bind(record.resource_id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            return Err(AppError::ResourceNotAvailable(format!(
                "Equipment {} is not available",
                equipment_code
            )));
        }

        let id = self.insert_loan(&mut tx, kind, record).await?;
        tx.commit().await?;

        Ok(LoanRef { kind, id })
    }

    async fn insert_loan(
        &self,
        tx: &mut sqlx::Transaction<'_, Sqlite>,
        kind: LoanKind,
        record: &CheckoutRecord,
    ) -> AppResult<i64> {
        let sql = format!(
            r#"
            INSERT INTO {} ({}, {}, supervisor_id, assistant_id, {}, remarks, signature_doc)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
            kind.table(),
            resource_col(kind),
            borrower_col(kind),
            open_col(kind),
        );

        let id: i64 = sqlx::query_scalar(&sql)
            .bind(record.resource_id)
            .bind(record.borrower_id)
            .bind(record.supervisor_id)
            .bind(record.assistant_id)
            .bind(record.timestamp)
            .bind(&record.remarks)
            .bind(&record.signature_doc)
            .fetch_one(&mut **tx)
            .await?;

        Ok(id)
    }

    /// Record a return. Fails with `LoanNotFound` for an unknown id and
    /// `AlreadyReturned` when the close timestamp is already set. For
    /// equipment the status flip back is conditional on `in_use`, which
    /// leaves an out-of-band damaged mark in place.
    pub async fn return_loan(
        &self,
        kind: LoanKind,
        loan_id: i64,
        data: &ReturnLoan,
    ) -> AppResult<()> {
        let timestamp = data.timestamp.unwrap_or_else(Utc::now);
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "SELECT {} as close_time, {} as res_id FROM {} WHERE id = $1",
            close_col(kind),
            resource_col(kind),
            kind.table(),
        );
        let row = sqlx::query(&sql)
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::LoanNotFound(loan_id))?;

        let close_time: Option<DateTime<Utc>> = row.get("close_time");
        let res_id: i64 = row.get("res_id");

        if close_time.is_some() {
            return Err(AppError::AlreadyReturned(loan_id));
        }

        let sql = format!(
            r#"
            UPDATE {} SET {} = $1,
                closed_by = $2,
                remarks = COALESCE($3, remarks),
                signature_doc = COALESCE($4, signature_doc)
            WHERE id = $5
            "#,
            kind.table(),
            close_col(kind),
        );
        sqlx::query(&sql)
            .bind(timestamp)
            .bind(data.closed_by)
            .bind(&data.remarks)
            .bind(&data.signature_doc)
            .bind(loan_id)
            .execute(&mut *tx)
            .await?;

        if kind.is_equipment() {
            // Rows-affected deliberately unchecked: a damaged mark keeps the
            // item unavailable through the return.
            sqlx::query(
                r#"
                UPDATE equipment SET status = 'available', updated_at = $1
                WHERE id = $2 AND status = 'in_use'
                "#,
            )
            .bind(timestamp)
            .bind(res_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a loan row. Deleting the only open loan for an equipment item
    /// compensates by resetting its status, in the same transaction.
    pub async fn delete_loan(&self, kind: LoanKind, loan_id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "SELECT {} as close_time, {} as res_id FROM {} WHERE id = $1",
            close_col(kind),
            resource_col(kind),
            kind.table(),
        );
        let row = sqlx::query(&sql)
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::LoanNotFound(loan_id))?;

        let close_time: Option<DateTime<Utc>> = row.get("close_time");
        let res_id: i64 = row.get("res_id");

        let sql = format!("DELETE FROM {} WHERE id = $1", kind.table());
        sqlx::query(&sql).bind(loan_id).execute(&mut *tx).await?;

        if close_time.is_none() && kind.is_equipment() {
            sqlx::query(
                r#"
                UPDATE equipment SET status = 'available', updated_at = $1
                WHERE id = $2 AND status = 'in_use'
                "#,
            )
            .bind(Utc::now())
            .bind(res_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get a room loan row by (kind, id)
    pub async fn get_room_loan(&self, kind: LoanKind, loan_id: i64) -> AppResult<RoomLoan> {
        debug_assert!(kind.is_room());
        let sql = format!("SELECT * FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, RoomLoan>(&sql)
            .bind(loan_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::LoanNotFound(loan_id))
    }

    /// Get an equipment loan row by (kind, id)
    pub async fn get_equipment_loan(
        &self,
        kind: LoanKind,
        loan_id: i64,
    ) -> AppResult<EquipmentLoan> {
        debug_assert!(kind.is_equipment());
        let sql = format!("SELECT * FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, EquipmentLoan>(&sql)
            .bind(loan_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::LoanNotFound(loan_id))
    }

    /// List room loans of one kind, newest first
    pub async fn list_room_loans(
        &self,
        kind: LoanKind,
        open_only: bool,
        room_id: Option<i64>,
        borrower_id: Option<i64>,
    ) -> AppResult<Vec<RoomLoanDetails>> {
        debug_assert!(kind.is_room());
        let borrower_table = match kind {
            LoanKind::RoomStudent => "students",
            _ => "professors",
        };

        let mut sql = format!(
            r#"
            SELECT l.*, r.code as room_code, r.name as room_name,
                   b.first_name || ' ' || b.last_name as borrower_name
            FROM {} l
            JOIN rooms r ON l.room_id = r.id
            JOIN {} b ON l.{} = b.id
            "#,
            kind.table(),
            borrower_table,
            borrower_col(kind),
        );
        let mut conditions = Vec::new();
        let mut idx = 0;
        if open_only {
            conditions.push("l.exit_time IS NULL".to_string());
        }
        if room_id.is_some() {
            idx += 1;
            conditions.push(format!("l.room_id = ${}", idx));
        }
        if borrower_id.is_some() {
            idx += 1;
            conditions.push(format!("l.{} = ${}", borrower_col(kind), idx));
        }
        if !conditions.is_empty() {
            sql.push_str(&format!(" WHERE {}", conditions.join(" AND ")));
        }
        sql.push_str(" ORDER BY l.entry_time DESC");

        let mut query = sqlx::query(&sql);
        if let Some(room_id) = room_id {
            query = query.bind(room_id);
        }
        if let Some(borrower_id) = borrower_id {
            query = query.bind(borrower_id);
        }
        let rows = query.fetch_all(&self.pool).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(RoomLoanDetails {
                kind,
                loan: RoomLoan::from_row(&row)?,
                room_code: row.get("room_code"),
                room_name: row.get("room_name"),
                borrower_name: row.get("borrower_name"),
            });
        }
        Ok(result)
    }

    /// List equipment loans of one kind, newest first
    pub async fn list_equipment_loans(
        &self,
        kind: LoanKind,
        open_only: bool,
        equipment_id: Option<i64>,
        borrower_id: Option<i64>,
    ) -> AppResult<Vec<EquipmentLoanDetails>> {
        debug_assert!(kind.is_equipment());
        let borrower_table = match kind {
            LoanKind::EquipmentStudent => "students",
            _ => "professors",
        };

        let mut sql = format!(
            r#"
            SELECT l.*, e.code as equipment_code, e.name as equipment_name,
                   b.first_name || ' ' || b.last_name as borrower_name
            FROM {} l
            JOIN equipment e ON l.equipment_id = e.id
            JOIN {} b ON l.{} = b.id
            "#,
            kind.table(),
            borrower_table,
            borrower_col(kind),
        );
        let mut conditions = Vec::new();
        let mut idx = 0;
        if open_only {
            conditions.push("l.return_time IS NULL".to_string());
        }
        if equipment_id.is_some() {
            idx += 1;
            conditions.push(format!("l.equipment_id = ${}", idx));
        }
        if borrower_id.is_some() {
            idx += 1;
            conditions.push(format!("l.{} = ${}", borrower_col(kind), idx));
        }
        if !conditions.is_empty() {
            sql.push_str(&format!(" WHERE {}", conditions.join(" AND ")));
        }
        sql.push_str(" ORDER BY l.delivery_time DESC");

        let mut query = sqlx::query(&sql);
        if let Some(equipment_id) = equipment_id {
            query = query.bind(equipment_id);
        }
        if let Some(borrower_id) = borrower_id {
            query = query.bind(borrower_id);
        }
        let rows = query.fetch_all(&self.pool).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(EquipmentLoanDetails {
                kind,
                loan: EquipmentLoan::from_row(&row)?,
                equipment_code: row.get("equipment_code"),
                equipment_name: row.get("equipment_name"),
                borrower_name: row.get("borrower_name"),
            });
        }
        Ok(result)
    }

    /// Count open loans for an equipment item across both borrower tables
    pub async fn count_open_for_equipment(&self, equipment_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT (SELECT COUNT(*) FROM equipment_student_loans
                    WHERE equipment_id = $1 AND return_time IS NULL)
                 + (SELECT COUNT(*) FROM equipment_professor_loans
                    WHERE equipment_id = $1 AND return_time IS NULL)
            "#,
        )
        .bind(equipment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Count open loans of one kind
    pub async fn count_open(&self, kind: LoanKind) -> AppResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} IS NULL",
            kind.table(),
            close_col(kind),
        );
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Count loans of one kind opened since the given instant
    pub async fn count_opened_since(
        &self,
        kind: LoanKind,
        since: DateTime<Utc>,
    ) -> AppResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} >= $1",
            kind.table(),
            open_col(kind),
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count loans of one kind closed since the given instant
    pub async fn count_closed_since(
        &self,
        kind: LoanKind,
        since: DateTime<Utc>,
    ) -> AppResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} >= $1",
            kind.table(),
            close_col(kind),
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
