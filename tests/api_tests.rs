use std::sync::Arc;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use vehicles_api::routes::create_pricing_app;
use vehicles_api::services::PricingService;
use vehicles_api::state::PricingState;

use common::{is_two_decimal_amount, send, vehicles_app, vehicles_app_with, DownLocationClient};

mod common;

fn volt_body(condition: &str) -> serde_json::Value {
    json!({
        "condition": condition,
        "details": { "make": "Chevrolet", "model": "Volt" },
        "location": { "lat": 40.0, "lon": -75.0 }
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = vehicles_app();
    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["service"], "vehicles-api");
}

#[tokio::test]
async fn test_vehicle_lifecycle() {
    let app = vehicles_app();

    // Crear
    let created = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(json!({
            "details": { "make": "Chevrolet", "model": "Volt" },
            "location": { "lat": 40.0, "lon": -75.0 }
        })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        created.headers.get(header::LOCATION).unwrap().to_str().unwrap(),
        format!("/vehicles/{}", id)
    );
    assert_eq!(created.body["condition"], "USED");
    assert!(created.body.get("price").is_none());

    // Leer: precio con dos decimales y dirección resuelta
    let fetched = send(&app, Method::GET, &format!("/vehicles/{}", id), None).await;

    assert_eq!(fetched.status, StatusCode::OK);
    let price = fetched.body["price"].as_str().unwrap().to_string();
    assert!(is_two_decimal_amount(&price), "unexpected price {}", price);
    assert_eq!(fetched.body["location"]["address"], "1600 Market Street");
    assert_eq!(fetched.body["location"]["city"], "Philadelphia");
    assert_eq!(fetched.body["display"], "Chevrolet Volt");

    // Actualizar: USED -> NEW, el precio no cambia
    let updated = send(
        &app,
        Method::PUT,
        &format!("/vehicles/{}", id),
        Some(volt_body("NEW")),
    )
    .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], id);
    assert_eq!(updated.body["condition"], "NEW");

    let refetched = send(&app, Method::GET, &format!("/vehicles/{}", id), None).await;
    assert_eq!(refetched.body["condition"], "NEW");
    assert_eq!(refetched.body["price"], price.as_str());

    // Borrar
    let deleted = send(&app, Method::DELETE, &format!("/vehicles/{}", id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = send(&app, Method::GET, &format!("/vehicles/{}", id), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_returns_enriched_vehicles() {
    let app = vehicles_app();

    let empty = send(&app, Method::GET, "/vehicles", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!([]));

    for condition in ["USED", "NEW"] {
        let response = send(&app, Method::POST, "/vehicles", Some(volt_body(condition))).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let listed = send(&app, Method::GET, "/vehicles", None).await;
    let vehicles = listed.body.as_array().unwrap();

    assert_eq!(vehicles.len(), 2);
    assert_ne!(vehicles[0]["id"], vehicles[1]["id"]);
    for vehicle in vehicles {
        assert!(is_two_decimal_amount(vehicle["price"].as_str().unwrap()));
        assert_eq!(vehicle["location"]["address"], "1600 Market Street");
    }
}

#[tokio::test]
async fn test_unknown_vehicle_is_not_found() {
    let app = vehicles_app();

    let get = send(&app, Method::GET, "/vehicles/999", None).await;
    let put = send(&app, Method::PUT, "/vehicles/999", Some(volt_body("NEW"))).await;
    let delete = send(&app, Method::DELETE, "/vehicles/999", None).await;

    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(put.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let app = vehicles_app();

    let non_numeric = send(&app, Method::GET, "/vehicles/abc", None).await;
    assert_eq!(non_numeric.status, StatusCode::BAD_REQUEST);

    let malformed = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(json!({ "details": { "make": "Chevrolet" } })),
    )
    .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["code"], "BAD_REQUEST");

    let unknown_condition = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(volt_body("SALVAGE")),
    )
    .await;
    assert_eq!(unknown_condition.status, StatusCode::BAD_REQUEST);

    let out_of_range = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(json!({
            "details": { "make": "Chevrolet", "model": "Volt" },
            "location": { "lat": 95.0, "lon": -75.0 }
        })),
    )
    .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);
    assert_eq!(out_of_range.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_collaborator_failure_is_bad_gateway() {
    let app = vehicles_app_with(Arc::new(DownLocationClient));

    let created = send(&app, Method::POST, "/vehicles", Some(volt_body("USED"))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();

    let fetched = send(&app, Method::GET, &format!("/vehicles/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::BAD_GATEWAY);
    assert_eq!(fetched.body["code"], "EXTERNAL_API_ERROR");
    assert!(!fetched.body.to_string().contains("unreachable"));
}

#[tokio::test]
async fn test_price_is_stable_across_requests() {
    let app = create_pricing_app(PricingState::new(PricingService::default()), &[]);

    let first = send(&app, Method::GET, "/price?vehicleId=3", None).await;
    let second = send(&app, Method::GET, "/price?vehicleId=3", None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["id"], 3);
    assert_eq!(first.body["price"], second.body["price"]);
    assert!(is_two_decimal_amount(first.body["price"].as_str().unwrap()));

    let legacy = send(&app, Method::GET, "/services/price?vehicleId=3", None).await;
    assert_eq!(legacy.body["price"], first.body["price"]);
}

#[tokio::test]
async fn test_price_rejects_invalid_vehicle_id() {
    let app = create_pricing_app(PricingState::new(PricingService::default()), &[]);

    for uri in [
        "/price",
        "/price?vehicleId=",
        "/price?vehicleId=abc",
        "/price?vehicleId=0",
        "/price?vehicleId=-3",
    ] {
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.body["code"], "BAD_REQUEST", "{}", uri);
    }
}
