//! Web 模块的数据类型定义

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::translation::{TranslationAdapter, TranslationBackend};

/// 应用状态
///
/// 配置在启动时加载后不再改变；翻译后端只保存静态配置，可以在请求间共享。
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub adapter: TranslationAdapter,
}

impl AppState {
    pub fn new(config: AppConfig, backend: Arc<dyn TranslationBackend>) -> Self {
        let adapter = TranslationAdapter::new(backend, &config.translation);
        Self {
            config: Arc::new(config),
            adapter,
        }
    }
}

/// `GET /extract_tags` 查询参数
#[derive(Debug, Deserialize)]
pub struct ExtractTagsQuery {
    pub url: Option<String>,
}

/// `POST /Tagtranslate` 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateTextsResponse {
    pub translated_texts: Vec<String>,
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
