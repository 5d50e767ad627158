//! Repository layer for database operations

pub mod campuses;
pub mod equipment;
pub mod loans;
pub mod professors;
pub mod projects;
pub mod rooms;
pub mod staff;
pub mod students;
pub mod units;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub campuses: campuses::CampusesRepository,
    pub rooms: rooms::RoomsRepository,
    pub units: units::UnitsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub students: students::StudentsRepository,
    pub professors: professors::ProfessorsRepository,
    pub staff: staff::StaffRepository,
    pub projects: projects::ProjectsRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            campuses: campuses::CampusesRepository::new(pool.clone()),
            rooms: rooms::RoomsRepository::new(pool.clone()),
            units: units::UnitsRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            students: students::StudentsRepository::new(pool.clone()),
            professors: professors::ProfessorsRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            projects: projects::ProjectsRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }
}
