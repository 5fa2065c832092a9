//! HTTP behavior of the generation endpoint.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use insurance_decoded::app::api::{router, AppState};
use insurance_decoded::{Catalogue, TopicRecord};
use serde_json::Value;
use tower::ServiceExt;

fn deductible_catalogue() -> Catalogue {
    Catalogue::new(vec![TopicRecord::new(
        "what is a deductible in insurance",
        &["insurance deductible explained", "how deductibles work"],
        "Deductibles explained in 60 seconds. No confusing jargon.",
        "Most people sign up for insurance without understanding what a deductible is or how it affects their bills.",
    )])
    .expect("catalogue")
}

async fn send(app: axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, json)
}

#[tokio::test]
async fn test_generate_returns_render_result() {
    let app = router(AppState::new(deductible_catalogue()), &[]);
    let (status, json) = send(app, "POST", "/api/generate").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["primaryKeyword"], "what is a deductible in insurance");
    assert_eq!(
        json["title"],
        "What is a deductible in insurance - Explained in 5 Minutes"
    );
    assert_eq!(
        json["secondaryKeywords"],
        serde_json::json!(["insurance deductible explained", "how deductibles work"])
    );

    let tags: Vec<&str> = json["tags"]
        .as_array()
        .expect("tags")
        .iter()
        .map(|t| t.as_str().expect("tag"))
        .collect();
    assert_eq!(
        &tags[..4],
        &[
            "what is a deductible in insurance",
            "insurance deductible explained",
            "how deductibles work",
            "insurance explained",
        ]
    );
    assert_eq!(json["hashtags"][0], "#whatisadeductibleininsurance");
    assert_eq!(
        json["chapters"][2],
        "0:20 - What is what is a deductible in insurance?"
    );
    for field in ["script", "videoPrompt", "thumbnailPrompt", "description"] {
        let text = json[field].as_str().expect(field);
        assert!(!text.is_empty(), "{} is empty", field);
    }
}

#[tokio::test]
async fn test_generate_with_builtin_catalogue() {
    let catalogue = Catalogue::builtin();
    let primaries: Vec<String> = catalogue
        .topics()
        .iter()
        .map(|t| t.primary.clone())
        .collect();
    let app = router(AppState::new(catalogue.clone()), &[]);

    for _ in 0..10 {
        let (status, json) = send(app.clone(), "POST", "/api/generate").await;
        assert_eq!(status, StatusCode::OK);
        let primary = json["primaryKeyword"].as_str().expect("primaryKeyword");
        assert!(primaries.iter().any(|p| p == primary));
    }
}

#[tokio::test]
async fn test_generate_rejects_get() {
    let app = router(AppState::new(Catalogue::builtin().clone()), &[]);
    let (status, _) = send(app, "GET", "/api/generate").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_status_reports_catalogue_size() {
    let app = router(AppState::new(Catalogue::builtin().clone()), &[]);
    let (status, json) = send(app, "GET", "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["topics"], 5);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["started_at"].is_string());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let origins = vec!["http://localhost:3000".to_string()];
    let app = router(AppState::new(Catalogue::builtin().clone()), &origins);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
