use axum::{
    Json,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, warn};

use super::error_responses::ErrorResponse;

/// Unmatched routes answer with the same body shape as every other API error.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!(%uri, "router: no route matched");
    let body = ErrorResponse {
        code: StatusCode::NOT_FOUND.as_u16(),
        message: format!("no route for {}", uri.path()),
        message_ar: "الصفحة المطلوبة غير موجودة".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

pub async fn health_check() -> impl IntoResponse {
    debug!("router: health check");
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
