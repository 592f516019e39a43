use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Liveness only; the database is not consulted.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
