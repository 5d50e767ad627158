//! LabLoan Server - Laboratory Loans Management System
//!
//! A Rust REST API server for tracking loans of rooms and equipment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labloan_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{refresher, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("labloan_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LabLoan Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool (single embedded database file)
    let connect_options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await
        .expect("Failed to open database");

    tracing::info!("Opened database {}", config.database.url);

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, &config.export.dir);

    // Background dashboard refresher (reads only)
    refresher::spawn_refresher(
        services.stats.clone(),
        services.dashboard.clone(),
        Duration::from_secs(config.dashboard.refresh_secs),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Rooms
        .route("/rooms", get(api::rooms::list_rooms))
        .route("/rooms", post(api::rooms::create_room))
        .route("/rooms/:code", get(api::rooms::get_room))
        .route("/rooms/:code", put(api::rooms::update_room))
        .route("/rooms/:code", delete(api::rooms::delete_room))
        .route("/rooms/:code/availability", get(api::rooms::room_availability))
        .route("/rooms/:code/loans", get(api::rooms::room_loans))
        .route("/rooms/:code/units", get(api::rooms::room_units))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:code", get(api::equipment::get_equipment))
        .route("/equipment/:code", put(api::equipment::update_equipment))
        .route("/equipment/:code", delete(api::equipment::delete_equipment))
        .route(
            "/equipment/:code/availability",
            get(api::equipment::equipment_availability),
        )
        .route(
            "/equipment/:code/status",
            put(api::equipment::set_equipment_status),
        )
        .route("/equipment/:code/loans", get(api::equipment::equipment_loans))
        // Room-fixed units
        .route("/units", get(api::equipment::list_units))
        .route("/units", post(api::equipment::create_unit))
        .route("/units/:id", get(api::equipment::get_unit))
        .route("/units/:id", put(api::equipment::update_unit))
        .route("/units/:id", delete(api::equipment::delete_unit))
        // Students
        .route("/students", get(api::borrowers::list_students))
        .route("/students", post(api::borrowers::create_student))
        .route("/students/:code", get(api::borrowers::get_student))
        .route("/students/:code", put(api::borrowers::update_student))
        .route("/students/:code", delete(api::borrowers::delete_student))
        .route("/students/:code/loans", get(api::borrowers::student_loans))
        // Professors
        .route("/professors", get(api::borrowers::list_professors))
        .route("/professors", post(api::borrowers::create_professor))
        .route("/professors/:id", get(api::borrowers::get_professor))
        .route("/professors/:id", put(api::borrowers::update_professor))
        .route("/professors/:id", delete(api::borrowers::delete_professor))
        .route("/professors/:id/loans", get(api::borrowers::professor_loans))
        // Staff
        .route("/staff", get(api::staff::list_staff))
        .route("/staff", post(api::staff::create_staff))
        .route("/staff/:id", get(api::staff::get_staff))
        .route("/staff/:id", put(api::staff::update_staff))
        .route("/staff/:id", delete(api::staff::delete_staff))
        // Campuses
        .route("/campuses", get(api::locations::list_campuses))
        .route("/campuses", post(api::locations::create_campus))
        .route("/campuses/:id", get(api::locations::get_campus))
        .route("/campuses/:id", put(api::locations::update_campus))
        .route("/campuses/:id", delete(api::locations::delete_campus))
        // Projects
        .route("/projects", get(api::locations::list_projects))
        .route("/projects", post(api::locations::create_project))
        .route("/projects/:id", get(api::locations::get_project))
        .route("/projects/:id", put(api::locations::update_project))
        .route("/projects/:id", delete(api::locations::delete_project))
        // Loans
        .route("/loans/rooms", post(api::loans::checkout_room))
        .route("/loans/equipment", post(api::loans::checkout_equipment))
        .route("/loans/:kind", get(api::loans::list_loans))
        .route("/loans/:kind/:id", get(api::loans::get_loan))
        .route("/loans/:kind/:id", delete(api::loans::delete_loan))
        .route("/loans/:kind/:id/return", post(api::loans::return_loan))
        // Statistics
        .route("/stats/dashboard", get(api::stats::get_dashboard))
        // Export
        .route("/export", post(api::export::export_tables))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
