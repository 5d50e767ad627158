//! Table export service
//!
//! One-shot dump of every table to per-table CSV files. No import path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        Campus, Equipment, EquipmentLoan, Professor, Project, Room, RoomLoan, RoomUnit, Staff,
        Student,
    },
    repository::Repository,
};

/// Per-table result of an export run
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExportedTable {
    pub table: String,
    pub file: String,
    pub rows: usize,
}

/// Export run report
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExportReport {
    pub dir: String,
    pub tables: Vec<ExportedTable>,
}

#[derive(Clone)]
pub struct ExportService {
    repository: Repository,
    dir: PathBuf,
}

impl ExportService {
    pub fn new(repository: Repository, dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            dir: dir.into(),
        }
    }

    /// Dump every table to `<dir>/<table>.csv`
    pub async fn dump_all(&self) -> AppResult<ExportReport> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Internal(format!("Cannot create export dir: {}", e)))?;

        let mut tables = Vec::new();
        tables.push(self.dump_table::<Campus>("campuses").await?);
        tables.push(self.dump_table::<Room>("rooms").await?);
        tables.push(self.dump_table::<RoomUnit>("room_units").await?);
        tables.push(self.dump_table::<Equipment>("equipment").await?);
        tables.push(self.dump_table::<Student>("students").await?);
        tables.push(self.dump_table::<Professor>("professors").await?);
        tables.push(self.dump_table::<Staff>("staff").await?);
        tables.push(self.dump_table::<Project>("projects").await?);
        tables.push(self.dump_table::<RoomLoan>("room_student_loans").await?);
        tables.push(self.dump_table::<RoomLoan>("room_professor_loans").await?);
        tables.push(
            self.dump_table::<EquipmentLoan>("equipment_student_loans")
                .await?,
        );
        tables.push(
            self.dump_table::<EquipmentLoan>("equipment_professor_loans")
                .await?,
        );

        let report = ExportReport {
            dir: self.dir.display().to_string(),
            tables,
        };
        tracing::info!(
            "Exported {} tables to {}",
            report.tables.len(),
            report.dir
        );
        Ok(report)
    }

    async fn dump_table<T>(&self, table: &str) -> AppResult<ExportedTable>
    where
        T: for<'r> FromRow<'r, sqlx::sqlite::SqliteRow> + Serialize + Send + Unpin,
    {
        let sql = format!("SELECT * FROM {} ORDER BY id", table);
        let rows: Vec<T> = sqlx::query_as(&sql)
            .fetch_all(&self.repository.pool)
            .await?;

        let path = self.dir.join(format!("{}.csv", table));
        write_csv(&path, &rows)?;

        Ok(ExportedTable {
            table: table.to_string(),
            file: path.display().to_string(),
            rows: rows.len(),
        })
    }
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Internal(format!("Cannot create {}: {}", path.display(), e)))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {}", e)))?;
    Ok(())
}
