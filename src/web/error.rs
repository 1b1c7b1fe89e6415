//! API 错误
//!
//! 所有失败都以 `{"error": "<message>"}` 的 JSON 形式返回。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::network::FetchError;
use crate::web::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing URL parameter")]
    MissingUrl,

    #[error("Missing texts parameter")]
    MissingTexts,

    #[error("Invalid texts parameter")]
    InvalidTexts,

    /// 目标页面无法访问或返回非 2xx
    #[error("{0}")]
    Upstream(#[from] FetchError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::MissingTexts | ApiError::InvalidTexts => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("请求处理失败: {}", self);
        } else {
            tracing::warn!("请求参数错误: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
