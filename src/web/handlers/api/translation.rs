//! 文本翻译API

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde_json::Value;
use tokio::task;

use crate::translation::{TextInput, TranslationRequest};
use crate::web::error::ApiError;
use crate::web::types::{AppState, TranslateTextsResponse};

/// 翻译文本列表
///
/// `POST /Tagtranslate`，请求体 `{"texts": string | [string]}`
pub async fn tag_translate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateTextsResponse>, ApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!("请求体不是有效的 JSON: {}", e);
        ApiError::MissingTexts
    })?;
    let texts = parse_texts(&body)?;

    tracing::info!("文本翻译请求");

    let translated_texts = task::spawn_blocking(move || {
        let request = TranslationRequest::new(Some(texts))
            .from_lang(state.config.translation.source_lang.as_str())
            .to_lang(state.config.translation.target_lang.as_str());
        state.adapter.translate_texts(request)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("任务执行失败: {}", e)))?;

    Ok(Json(TranslateTextsResponse { translated_texts }))
}

/// 从请求体读取 `texts`
///
/// 缺失或为假值（`null`、`false`、`0`、空字符串、空数组、空对象）视为缺失。
pub fn parse_texts(body: &Value) -> Result<TextInput, ApiError> {
    let texts = body.get("texts").unwrap_or(&Value::Null);
    if is_falsy(texts) {
        return Err(ApiError::MissingTexts);
    }

    match texts {
        Value::String(text) => Ok(TextInput::One(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(TextInput::Many)
            .ok_or(ApiError::InvalidTexts),
        _ => Err(ApiError::InvalidTexts),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
