//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/extract_tags", get(extract_tags))
        .route("/Tagtranslate", post(tag_translate))
        .route("/health", get(health_check))
}
