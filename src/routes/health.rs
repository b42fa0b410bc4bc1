use axum::{response::Json as ResponseJson, routing::get, Json, Router};

use crate::models::HealthResponse;

pub fn router() -> Router {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check() -> ResponseJson<HealthResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        storage: "configured".to_string(),
    };

    Json(response)
}
