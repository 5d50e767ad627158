//! Availability lifecycle tests
//!
//! Exercises the tracker end to end against an in-memory database with the
//! real migrations: stored-status sync for equipment, derived status for
//! rooms, deletion compensation, and the damaged override.

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use labloan_server::{
    error::AppError,
    models::{
        enums::{EquipmentStatus, LoanKind},
        equipment::CreateEquipment,
        loan::{Borrower, CheckoutEquipment, CheckoutRoom, ReturnLoan},
        professor::CreateProfessor,
        room::CreateRoom,
        staff::CreateStaff,
        student::CreateStudent,
    },
    repository::Repository,
    services::{availability::AvailabilityService, loans::LoansService},
};

/// In-memory pool. A single connection, or every connection would see its
/// own empty database.
async fn setup_pool() -> Pool<Sqlite> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

struct Fixture {
    repository: Repository,
    availability: AvailabilityService,
    supervisor_id: i64,
}

impl Fixture {
    async fn new() -> Self {
        let repository = Repository::new(setup_pool().await);
        let availability = AvailabilityService::new(repository.clone());

        let supervisor = repository
            .staff
            .create(&CreateStaff {
                name: "Dana Reyes".to_string(),
                role: Some("lab technician".to_string()),
                email: None,
            })
            .await
            .expect("create staff");

        repository
            .students
            .create(&CreateStudent {
                code: "1001".to_string(),
                first_name: "Ana".to_string(),
                last_name: "Torres".to_string(),
                program: Some("Electronics".to_string()),
                email: None,
                phone: None,
            })
            .await
            .expect("create student");

        repository
            .professors
            .create(&CreateProfessor {
                first_name: "Luis".to_string(),
                last_name: "Mora".to_string(),
                department: Some("Physics".to_string()),
                email: None,
                phone: None,
            })
            .await
            .expect("create professor");

        Self {
            repository,
            availability,
            supervisor_id: supervisor.id,
        }
    }

    async fn add_equipment(&self, code: &str) {
        self.repository
            .equipment
            .create(&CreateEquipment {
                code: code.to_string(),
                name: format!("Oscilloscope {}", code),
                brand: None,
                model: None,
                notes: None,
            })
            .await
            .expect("create equipment");
    }

    async fn add_room(&self, code: &str) {
        self.repository
            .rooms
            .create(&CreateRoom {
                code: code.to_string(),
                name: format!("Lab {}", code),
                campus_id: None,
                notes: None,
            })
            .await
            .expect("create room");
    }

    fn student(&self) -> Borrower {
        Borrower::Student {
            code: "1001".to_string(),
        }
    }

    fn equipment_checkout(&self, code: &str) -> CheckoutEquipment {
        CheckoutEquipment {
            equipment_code: code.to_string(),
            borrower: self.student(),
            supervisor_id: self.supervisor_id,
            assistant_id: None,
            timestamp: None,
            remarks: None,
            signature_doc: None,
        }
    }

    fn room_checkout(&self, code: &str) -> CheckoutRoom {
        CheckoutRoom {
            room_code: code.to_string(),
            borrower: self.student(),
            supervisor_id: self.supervisor_id,
            assistant_id: None,
            timestamp: None,
            remarks: None,
            signature_doc: None,
        }
    }

    fn return_request(&self) -> ReturnLoan {
        ReturnLoan {
            closed_by: self.supervisor_id,
            timestamp: None,
            remarks: None,
            signature_doc: None,
        }
    }
}

#[tokio::test]
async fn equipment_checkout_flips_status_and_opens_exactly_one_loan() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-01").await;

    let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let mut request = fx.equipment_checkout("EQ-01");
    request.timestamp = Some(t0);

    let loan = fx
        .availability
        .checkout_equipment(&request)
        .await
        .expect("checkout");
    assert_eq!(loan.kind, LoanKind::EquipmentStudent);

    assert!(!fx
        .availability
        .is_equipment_available("EQ-01")
        .await
        .unwrap());

    let equipment = fx.repository.equipment.get_by_code("EQ-01").await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::InUse);
    assert_eq!(
        fx.repository
            .loans
            .count_open_for_equipment(equipment.id)
            .await
            .unwrap(),
        1
    );

    let row = fx
        .repository
        .loans
        .get_equipment_loan(loan.kind, loan.id)
        .await
        .unwrap();
    assert_eq!(row.delivery_time, t0);
    assert!(row.return_time.is_none());
}

#[tokio::test]
async fn equipment_return_restores_availability_and_sets_close_time() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-01").await;

    let loan = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-01"))
        .await
        .unwrap();

    let t1 = DateTime::from_timestamp(1_700_003_600, 0).unwrap();
    let mut request = fx.return_request();
    request.timestamp = Some(t1);
    fx.availability
        .return_loan(loan.kind, loan.id, &request)
        .await
        .expect("return");

    assert!(fx
        .availability
        .is_equipment_available("EQ-01")
        .await
        .unwrap());

    let row = fx
        .repository
        .loans
        .get_equipment_loan(loan.kind, loan.id)
        .await
        .unwrap();
    assert_eq!(row.return_time, Some(t1));
    assert_eq!(row.closed_by, Some(fx.supervisor_id));
}

#[tokio::test]
async fn second_return_is_rejected() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-01").await;

    let loan = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-01"))
        .await
        .unwrap();
    fx.availability
        .return_loan(loan.kind, loan.id, &fx.return_request())
        .await
        .unwrap();

    let err = fx
        .availability
        .return_loan(loan.kind, loan.id, &fx.return_request())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyReturned(id) if id == loan.id));
}

#[tokio::test]
async fn checkout_of_unavailable_equipment_fails_and_writes_nothing() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-01").await;

    fx.availability
        .checkout_equipment(&fx.equipment_checkout("EQ-01"))
        .await
        .unwrap();

    let err = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ResourceNotAvailable(_)));

    let equipment = fx.repository.equipment.get_by_code("EQ-01").await.unwrap();
    assert_eq!(
        fx.repository
            .loans
            .count_open_for_equipment(equipment.id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn room_status_is_derived_from_open_loans() {
    let fx = Fixture::new().await;
    fx.add_room("A-101").await;

    assert!(fx.availability.is_room_available("A-101").await.unwrap());

    let loan = fx
        .availability
        .checkout_room(&fx.room_checkout("A-101"))
        .await
        .unwrap();
    assert_eq!(loan.kind, LoanKind::RoomStudent);
    assert!(!fx.availability.is_room_available("A-101").await.unwrap());

    // A second checkout against the occupied room is refused
    let err = fx
        .availability
        .checkout_room(&fx.room_checkout("A-101"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ResourceNotAvailable(_)));

    fx.availability
        .return_loan(loan.kind, loan.id, &fx.return_request())
        .await
        .unwrap();
    assert!(fx.availability.is_room_available("A-101").await.unwrap());

    // Deleting an open loan also frees the room, with no status write anywhere
    let loan = fx
        .availability
        .checkout_room(&fx.room_checkout("A-101"))
        .await
        .unwrap();
    assert!(!fx.availability.is_room_available("A-101").await.unwrap());
    fx.availability.delete_loan(loan.kind, loan.id).await.unwrap();
    assert!(fx.availability.is_room_available("A-101").await.unwrap());
}

#[tokio::test]
async fn professor_room_loans_occupy_the_room_too() {
    let fx = Fixture::new().await;
    fx.add_room("A-102").await;

    let mut request = fx.room_checkout("A-102");
    request.borrower = Borrower::Professor { id: 1 };

    let loan = fx.availability.checkout_room(&request).await.unwrap();
    assert_eq!(loan.kind, LoanKind::RoomProfessor);
    assert!(!fx.availability.is_room_available("A-102").await.unwrap());
}

#[tokio::test]
async fn deleting_an_open_equipment_loan_resets_status() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-02").await;

    let loan = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-02"))
        .await
        .unwrap();

    fx.availability.delete_loan(loan.kind, loan.id).await.unwrap();

    let equipment = fx.repository.equipment.get_by_code("EQ-02").await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Available);
    assert_eq!(
        fx.repository
            .loans
            .count_open_for_equipment(equipment.id)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn deleting_a_closed_loan_leaves_status_alone() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-02").await;

    // Close one loan, then open a second one before deleting the first
    let first = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-02"))
        .await
        .unwrap();
    fx.availability
        .return_loan(first.kind, first.id, &fx.return_request())
        .await
        .unwrap();
    fx.availability
        .checkout_equipment(&fx.equipment_checkout("EQ-02"))
        .await
        .unwrap();

    fx.availability.delete_loan(first.kind, first.id).await.unwrap();

    let equipment = fx.repository.equipment.get_by_code("EQ-02").await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::InUse);
}

#[tokio::test]
async fn damaged_mark_survives_the_return() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-03").await;

    let loan = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-03"))
        .await
        .unwrap();

    // Damaged while on loan: simultaneously on-loan and damaged
    fx.availability
        .set_equipment_status("EQ-03", EquipmentStatus::Damaged)
        .await
        .unwrap();
    assert!(!fx
        .availability
        .is_equipment_available("EQ-03")
        .await
        .unwrap());

    // The return closes the loan but does not clear the damage mark
    fx.availability
        .return_loan(loan.kind, loan.id, &fx.return_request())
        .await
        .unwrap();
    assert!(!fx
        .availability
        .is_equipment_available("EQ-03")
        .await
        .unwrap());
    let equipment = fx.repository.equipment.get_by_code("EQ-03").await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Damaged);

    // Manual clear restores availability
    fx.availability
        .set_equipment_status("EQ-03", EquipmentStatus::Available)
        .await
        .unwrap();
    assert!(fx
        .availability
        .is_equipment_available("EQ-03")
        .await
        .unwrap());
}

#[tokio::test]
async fn borrower_listing_tracks_open_state() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-06").await;
    fx.add_room("B-201").await;
    let loans = LoansService::new(fx.repository.clone());

    let room_loan = fx
        .availability
        .checkout_room(&fx.room_checkout("B-201"))
        .await
        .unwrap();
    fx.availability
        .checkout_equipment(&fx.equipment_checkout("EQ-06"))
        .await
        .unwrap();

    let held = loans.loans_for_student("1001", true).await.unwrap();
    assert_eq!(held.room_loans.len(), 1);
    assert_eq!(held.equipment_loans.len(), 1);
    assert_eq!(held.room_loans[0].room_code, "B-201");
    assert_eq!(held.equipment_loans[0].borrower_name, "Ana Torres");

    fx.availability
        .return_loan(room_loan.kind, room_loan.id, &fx.return_request())
        .await
        .unwrap();

    let held = loans.loans_for_student("1001", true).await.unwrap();
    assert_eq!(held.room_loans.len(), 0);
    assert_eq!(held.equipment_loans.len(), 1);

    // History keeps the closed loan
    let history = loans.loans_for_room("B-201").await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].loan.exit_time.is_some());
}

#[tokio::test]
async fn in_use_cannot_be_set_manually() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-04").await;

    let err = fx
        .availability
        .set_equipment_status("EQ-04", EquipmentStatus::InUse)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn broken_references_are_reported_by_kind() {
    let fx = Fixture::new().await;
    fx.add_equipment("EQ-05").await;

    let err = fx
        .availability
        .checkout_equipment(&fx.equipment_checkout("EQ-99"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ResourceNotFound(_)));

    let mut request = fx.equipment_checkout("EQ-05");
    request.borrower = Borrower::Student {
        code: "9999".to_string(),
    };
    let err = fx.availability.checkout_equipment(&request).await.unwrap_err();
    assert!(matches!(err, AppError::BorrowerNotFound(_)));

    let err = fx
        .availability
        .return_loan(LoanKind::EquipmentStudent, 4242, &fx.return_request())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::LoanNotFound(4242)));
}
