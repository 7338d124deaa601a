use axum::{response::Html, Json};
use shared::HealthResponse;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Late Show API</h1>")
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "late-show-api".to_string(),
    })
}
