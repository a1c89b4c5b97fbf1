use axum::Json;
use serde_json::{json, Value};

pub async fn home() -> &'static str {
    "SafuBot is running!"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
