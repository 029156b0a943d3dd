//! Rutas HTTP de la aplicación

pub mod admin_routes;
pub mod document_routes;
pub mod driver_routes;
pub mod fuel_routes;
pub mod insurance_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Construye el router completo con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/documents", document_routes::create_document_router())
        .nest("/api/insurance", insurance_routes::create_insurance_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/fuel", fuel_routes::create_fuel_router())
        .nest("/api/admin", admin_routes::create_admin_router())
        .nest("/api/dashboard", admin_routes::create_dashboard_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
