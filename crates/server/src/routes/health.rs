use axum::http::StatusCode;

/// Liveness check; answers "OK" while the service is up
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, body) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
