#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bmi_engine::app::server::{router, ServerState};
use bmi_engine::utils::monitor::UptimeMonitor;
use tower::ServiceExt;

#[tokio::test]
async fn test_ping_returns_health_payload() {
    let app = router(ServerState::new(UptimeMonitor::new(), "test"));

    let response = app
        .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["environment"], "test");
    assert!(json["uptimeSeconds"].as_f64().unwrap() >= 0.0);
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = router(ServerState::new(UptimeMonitor::new(), "test"));

    let response = app
        .oneshot(Request::builder().uri("/api/bmi").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
