//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrowers, equipment, export, health, loans, locations, rooms, staff, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabLoan API",
        version = "0.3.0",
        description = "Laboratory Loans Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::room_availability,
        rooms::room_loans,
        rooms::room_units,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::equipment_availability,
        equipment::set_equipment_status,
        equipment::equipment_loans,
        equipment::list_units,
        equipment::get_unit,
        equipment::create_unit,
        equipment::update_unit,
        equipment::delete_unit,
        // Borrowers
        borrowers::list_students,
        borrowers::get_student,
        borrowers::create_student,
        borrowers::update_student,
        borrowers::delete_student,
        borrowers::student_loans,
        borrowers::list_professors,
        borrowers::get_professor,
        borrowers::create_professor,
        borrowers::update_professor,
        borrowers::delete_professor,
        borrowers::professor_loans,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Locations
        locations::list_campuses,
        locations::get_campus,
        locations::create_campus,
        locations::update_campus,
        locations::delete_campus,
        locations::list_projects,
        locations::get_project,
        locations::create_project,
        locations::update_project,
        locations::delete_project,
        // Loans
        loans::checkout_room,
        loans::checkout_equipment,
        loans::list_loans,
        loans::get_loan,
        loans::return_loan,
        loans::delete_loan,
        // Stats
        stats::get_dashboard,
        // Export
        export::export_tables,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::UnitStatus,
            crate::models::enums::RoomStatus,
            crate::models::enums::LoanKind,
            // Rooms
            crate::models::room::Room,
            crate::models::room::RoomWithStatus,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            rooms::AvailabilityResponse,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::SetEquipmentStatus,
            crate::models::equipment::RoomUnit,
            crate::models::equipment::CreateRoomUnit,
            crate::models::equipment::UpdateRoomUnit,
            // Borrowers
            crate::models::student::Student,
            crate::models::student::CreateStudent,
            crate::models::student::UpdateStudent,
            crate::models::professor::Professor,
            crate::models::professor::CreateProfessor,
            crate::models::professor::UpdateProfessor,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            // Locations
            crate::models::campus::Campus,
            crate::models::campus::CreateCampus,
            crate::models::campus::UpdateCampus,
            crate::models::project::Project,
            crate::models::project::CreateProject,
            crate::models::project::UpdateProject,
            // Loans
            crate::models::loan::Borrower,
            crate::models::loan::RoomLoan,
            crate::models::loan::EquipmentLoan,
            crate::models::loan::LoanRecord,
            crate::models::loan::LoanRef,
            crate::models::loan::CheckoutRoom,
            crate::models::loan::CheckoutEquipment,
            crate::models::loan::ReturnLoan,
            crate::models::loan::RoomLoanDetails,
            crate::models::loan::EquipmentLoanDetails,
            crate::models::loan::BorrowerLoans,
            loans::LoanListing,
            loans::CheckoutResponse,
            loans::ReturnResponse,
            // Stats
            stats::DashboardSnapshot,
            stats::RoomCounts,
            stats::EquipmentCounts,
            stats::UnitCounts,
            stats::LoanCounts,
            stats::BorrowerCounts,
            // Export
            crate::services::export::ExportReport,
            crate::services::export::ExportedTable,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Room registry and derived occupancy"),
        (name = "equipment", description = "Equipment catalogs and status"),
        (name = "borrowers", description = "Student and professor registries"),
        (name = "staff", description = "Laboratory staff registry"),
        (name = "locations", description = "Campuses and curriculum projects"),
        (name = "loans", description = "Loan lifecycle"),
        (name = "stats", description = "Dashboard aggregation"),
        (name = "export", description = "Table exports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
