//! API integration tests
//!
//! These run against a live server on localhost and are ignored by default.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_room() {
    let client = Client::new();

    let response = client
        .post(format!("{}/rooms", BASE_URL))
        .json(&json!({
            "code": "TEST-ROOM",
            "name": "Integration Test Lab"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    // Fresh room is available
    let response = client
        .get(format!("{}/rooms/TEST-ROOM/availability", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], true);

    let response = client
        .delete(format!("{}/rooms/TEST-ROOM", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_equipment_checkout_and_return_flow() {
    let client = Client::new();

    // Prerequisites
    let staff: Value = client
        .post(format!("{}/staff", BASE_URL))
        .json(&json!({"name": "Test Supervisor"}))
        .send()
        .await
        .expect("Failed to create staff")
        .json()
        .await
        .expect("Failed to parse staff");
    let supervisor_id = staff["id"].as_i64().expect("No staff ID");

    let _: Value = client
        .post(format!("{}/students", BASE_URL))
        .json(&json!({
            "code": "TEST-1001",
            "first_name": "Test",
            "last_name": "Student"
        }))
        .send()
        .await
        .expect("Failed to create student")
        .json()
        .await
        .expect("Failed to parse student");

    let _: Value = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "code": "TEST-EQ-01",
            "name": "Test Multimeter"
        }))
        .send()
        .await
        .expect("Failed to create equipment")
        .json()
        .await
        .expect("Failed to parse equipment");

    // Checkout
    let response = client
        .post(format!("{}/loans/equipment", BASE_URL))
        .json(&json!({
            "equipment_code": "TEST-EQ-01",
            "borrower": {"kind": "student", "code": "TEST-1001"},
            "supervisor_id": supervisor_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let loan_id = body["id"].as_i64().expect("No loan ID");
    assert_eq!(body["kind"], "equipment_student");

    // Unavailable while out
    let response = client
        .get(format!("{}/equipment/TEST-EQ-01/availability", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], false);

    // Return
    let response = client
        .post(format!(
            "{}/loans/equipment_student/{}/return",
            BASE_URL, loan_id
        ))
        .json(&json!({"closed_by": supervisor_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Available again
    let response = client
        .get(format!("{}/equipment/TEST-EQ-01/availability", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], true);

    // Second return is a conflict
    let response = client
        .post(format!(
            "{}/loans/equipment_student/{}/return",
            BASE_URL, loan_id
        ))
        .json(&json!({"closed_by": supervisor_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_get_dashboard() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["rooms"]["total"].is_number());
    assert!(body["equipment"]["total"].is_number());
    assert!(body["loans"]["open_total"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_unknown_loan_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/loans/room_student/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
