//! 健康检查

/// `GET /health`
pub async fn health_check() -> &'static str {
    "OK"
}
