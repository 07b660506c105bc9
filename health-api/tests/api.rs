//! Integration tests for the health API router.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use health_api::routes::health::HealthResponse;
use health_api::{ApiConfig, create_app};

fn setup(front_origin: Option<&str>) -> axum::Router {
    let cfg = ApiConfig::from_values(None, front_origin).expect("valid config");
    create_app(&cfg)
}

#[tokio::test]
async fn test_health_check() {
    let app = setup(None);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));

    let parsed: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, HealthResponse { ok: true });
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = setup(None);

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = setup(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://anywhere.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_echoes_configured_origin() {
    let app = setup(Some("https://front.example.com"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://front.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://front.example.com"
    );
}

#[tokio::test]
async fn test_cors_omits_header_for_other_origins() {
    let app = setup(Some("https://front.example.com"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://other.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The request itself succeeds; the browser enforces the missing header.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_preflight_is_answered() {
    let app = setup(None);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/health")
                .header(header::ORIGIN, "https://front.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .is_some()
    );
}
