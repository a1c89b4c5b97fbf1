use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

mod helpers;
use helpers::{create_app, RecordingTransport};

async fn get_json(store_offline: bool, uri: &str) -> (StatusCode, Value) {
    let app = create_app(store_offline, RecordingTransport::default());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_lookup_domain_returns_structured_result() {
    let (status, json) = get_json(
        false,
        "/api/lookup/domain?value=https%3A%2F%2Fwww.SCAM.example%2Fclaim",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "domain");
    assert_eq!(json["is_flagged"], true);
    assert_eq!(json["subject"], "scam.example");
    assert_eq!(json["associated"][0], "0xABC");
}

#[tokio::test]
async fn test_lookup_unknown_address_is_not_flagged() {
    let (status, json) = get_json(false, "/api/lookup/address?value=0x123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_flagged"], false);
    assert_eq!(json["associated"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_lookup_with_store_down_is_unavailable() {
    let (status, json) = get_json(true, "/api/lookup/address?value=0xABC").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "scam database unavailable");
}
