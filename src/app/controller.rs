use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn get_root(State(_state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "service": "journey-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_health(State(_state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
