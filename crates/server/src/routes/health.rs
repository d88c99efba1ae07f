use axum::http::StatusCode;

/// Liveness probe; the in-memory store has nothing else to check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
