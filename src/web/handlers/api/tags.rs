//! 标签提取API

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use tokio::task;

use crate::core::extract_page_tags;
use crate::parsers::html::TagRecord;
use crate::web::error::ApiError;
use crate::web::types::{AppState, ExtractTagsQuery};

/// 获取页面并返回翻译后的标签列表
///
/// `GET /extract_tags?url=<string>`
pub async fn extract_tags(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExtractTagsQuery>,
) -> Result<Json<Vec<TagRecord>>, ApiError> {
    let url = match query.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(ApiError::MissingUrl),
    };

    tracing::info!("提取标签请求: {}", url);

    let tags = task::spawn_blocking(move || {
        extract_page_tags(&state.config, &state.adapter, &url)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("任务执行失败: {}", e)))??;

    Ok(Json(tags))
}
