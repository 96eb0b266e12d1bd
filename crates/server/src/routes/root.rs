use axum::http::StatusCode;

/// Identifies the service at the API root
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", content_type = "text/plain", body = String)
    ),
    tag = ""
)]
pub async fn root() -> (StatusCode, &'static str) {
    (
        StatusCode::OK,
        concat!("School Travel API v", env!("CARGO_PKG_VERSION")),
    )
}
