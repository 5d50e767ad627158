//! Dashboard statistics service
//!
//! Aggregate counts only; every call re-reads the store. The background
//! refresher caches the result for the dashboard endpoint.

use chrono::Utc;

use crate::{
    api::stats::{
        BorrowerCounts, DashboardSnapshot, EquipmentCounts, LoanCounts, RoomCounts, UnitCounts,
    },
    error::AppResult,
    models::enums::{EquipmentStatus, LoanKind, UnitStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the full dashboard snapshot
    pub async fn dashboard(&self) -> AppResult<DashboardSnapshot> {
        let rooms_total = self.repository.rooms.count().await?;
        let rooms_occupied = self.repository.rooms.count_occupied().await?;

        let equipment_total = self.repository.equipment.count().await?;
        let mut equipment = EquipmentCounts {
            total: equipment_total,
            available: 0,
            in_use: 0,
            damaged: 0,
        };
        for (status, count) in self.repository.equipment.count_by_status().await? {
            match status {
                EquipmentStatus::Available => equipment.available = count,
                EquipmentStatus::InUse => equipment.in_use = count,
                EquipmentStatus::Damaged => equipment.damaged = count,
            }
        }

        let mut units = UnitCounts {
            total: 0,
            active: 0,
            inactive: 0,
        };
        for (status, count) in self.repository.units.count_by_status().await? {
            units.total += count;
            match status {
                UnitStatus::Active => units.active = count,
                UnitStatus::Inactive => units.inactive = count,
            }
        }

        let open_room_student = self.repository.loans.count_open(LoanKind::RoomStudent).await?;
        let open_room_professor = self
            .repository
            .loans
            .count_open(LoanKind::RoomProfessor)
            .await?;
        let open_equipment_student = self
            .repository
            .loans
            .count_open(LoanKind::EquipmentStudent)
            .await?;
        let open_equipment_professor = self
            .repository
            .loans
            .count_open(LoanKind::EquipmentProfessor)
            .await?;

        let today = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);

        let mut checkouts_today = 0;
        let mut returns_today = 0;
        for kind in [
            LoanKind::RoomStudent,
            LoanKind::RoomProfessor,
            LoanKind::EquipmentStudent,
            LoanKind::EquipmentProfessor,
        ] {
            checkouts_today += self.repository.loans.count_opened_since(kind, today).await?;
            returns_today += self.repository.loans.count_closed_since(kind, today).await?;
        }

        Ok(DashboardSnapshot {
            rooms: RoomCounts {
                total: rooms_total,
                available: rooms_total - rooms_occupied,
                occupied: rooms_occupied,
            },
            equipment,
            units,
            loans: LoanCounts {
                open_room_student,
                open_room_professor,
                open_equipment_student,
                open_equipment_professor,
                open_total: open_room_student
                    + open_room_professor
                    + open_equipment_student
                    + open_equipment_professor,
                checkouts_today,
                returns_today,
            },
            borrowers: BorrowerCounts {
                students: self.repository.students.count().await?,
                professors: self.repository.professors.count().await?,
            },
            generated_at: Utc::now(),
        })
    }
}
