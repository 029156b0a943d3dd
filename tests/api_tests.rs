mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use common::fixed_now;
use fleet_admin::config::EnvironmentConfig;
use fleet_admin::repositories::Repository;
use fleet_admin::utils::FixedClock;
use fleet_admin::{create_app, AppState};

fn create_test_app() -> Router {
    let state = AppState::with_clock(
        Repository::in_memory(),
        EnvironmentConfig::default(),
        Arc::new(FixedClock::new(fixed_now())),
    );
    create_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_vehicle(app: &Router, plate: &str, odometer: i64) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/vehicles",
        Some(json!({ "license_plate": plate, "brand": "Renault", "model": "Master", "odometer": odometer })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body["data"].clone()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_vehicle_validation_and_conflict() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/vehicles",
        Some(json!({ "license_plate": "!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    create_vehicle(&app, "AB-123-CD", 0).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/vehicles",
        Some(json!({ "license_plate": "ab 123 cd" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_missing_record_is_404() {
    let app = create_test_app();
    let uri = format!("/api/trips/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_assign_driver_over_http() {
    let app = create_test_app();
    let vehicle = create_vehicle(&app, "AB-123-CD", 1_000).await;
    let (status, driver) = send(
        &app,
        Method::POST,
        "/api/drivers",
        Some(json!({ "first_name": "Léa", "last_name": "Moreau", "license_number": "B-998877" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let driver_id = driver["data"]["id"].as_str().unwrap().to_string();
    let vehicle_id = vehicle["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/vehicles/{}/assign", vehicle_id),
        Some(json!({ "driver_id": driver_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["vehicle"]["status"], "in_service");

    let (_, stored) = send(&app, Method::GET, &format!("/api/drivers/{}", driver_id), None).await;
    assert_eq!(stored["assigned_vehicle_id"], vehicle_id.as_str());
}

#[tokio::test]
async fn test_document_status_is_derived_not_trusted() {
    let app = create_test_app();
    let expired = (fixed_now() - Duration::days(2)).to_rfc3339();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/documents",
        Some(json!({
            "title": "Contrôle technique",
            "kind": "vehicle",
            "expiration_date": expired,
            "status": "valid"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["status"], "expired");
}

#[tokio::test]
async fn test_trip_completion_over_http() {
    let app = create_test_app();
    let vehicle = create_vehicle(&app, "AB-123-CD", 10_000).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/trips",
        Some(json!({
            "vehicle_id": vehicle["id"],
            "origin": "Bordeaux",
            "destination": "Toulouse",
            "odometer_start": 10_000,
            "toll_fees": "18.40"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", created);
    let trip_id = created["data"]["trip"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/trips/{}/complete", trip_id),
        Some(json!({ "odometer_end": 10_250 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["trip"]["distance"], 250);
    assert_eq!(body["data"]["vehicle"]["odometer"], 10_250);
    assert_eq!(body["data"]["vehicle"]["status"], "available");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/trips/{}/complete", trip_id),
        Some(json!({ "odometer_end": 10_300 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE");
}

#[tokio::test]
async fn test_refresh_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::POST, "/api/admin/refresh/documents", None).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["attempted"], 0);

    let (status, _) = send(&app, Method::POST, "/api/admin/refresh/trips", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/api/admin/refresh/spaceships", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_expiration_dashboard() {
    let app = create_test_app();
    let soon = (fixed_now() + Duration::days(12)).to_rfc3339();
    send(
        &app,
        Method::POST,
        "/api/documents",
        Some(json!({ "title": "Carte grise", "kind": "vehicle", "expiration_date": soon })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/dashboard/expirations?window_days=30", None).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["documents"]["expiring"], 1);
    assert_eq!(body["alerts"][0]["days_until_expiration"], 12);
}
