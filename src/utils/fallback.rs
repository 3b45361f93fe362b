use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": format!("{} not allowed for {}", method, uri.path()) })),
    )
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Path not found: {}", uri.path()) })),
    )
}
