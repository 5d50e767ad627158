//! Business logic services

pub mod availability;
pub mod equipment;
pub mod export;
pub mod loans;
pub mod locations;
pub mod refresher;
pub mod registry;
pub mod rooms;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub loans: loans::LoansService,
    pub rooms: rooms::RoomsService,
    pub equipment: equipment::EquipmentService,
    pub students: registry::StudentsService,
    pub professors: registry::ProfessorsService,
    pub staff: registry::StaffService,
    pub campuses: locations::CampusesService,
    pub projects: locations::ProjectsService,
    pub stats: stats::StatsService,
    pub export: export::ExportService,
    pub dashboard: refresher::DashboardCache,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, export_dir: &str) -> Self {
        Self {
            availability: availability::AvailabilityService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            rooms: rooms::RoomsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            students: registry::StudentsService::new(repository.clone()),
            professors: registry::ProfessorsService::new(repository.clone()),
            staff: registry::StaffService::new(repository.clone()),
            campuses: locations::CampusesService::new(repository.clone()),
            projects: locations::ProjectsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            export: export::ExportService::new(repository, export_dir),
            dashboard: refresher::DashboardCache::new(),
        }
    }
}
