//! 翻译配置
//!
//! 翻译后端和适配器使用的静态配置，随 [`crate::config::AppConfig`] 一起在启动时加载。

use serde::{Deserialize, Serialize};

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::languages::CHINESE_FALLBACK_LOCALES;

/// 翻译配置常量
pub mod constants {
    pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";
    pub const DEFAULT_SOURCE_LANG: &str = "auto";
    pub const DEFAULT_TARGET_LANG: &str = "zh-cn";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
}

/// 翻译配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 翻译接口地址
    pub api_url: String,
    /// 默认源语言
    pub source_lang: String,
    /// 默认目标语言
    pub target_lang: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
    /// 目标语言无效时尝试的中文代码
    pub fallback_locales: Vec<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
            fallback_locales: CHINESE_FALLBACK_LOCALES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

impl TranslationConfig {
    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(TranslationError::ConfigError(
                "api_url cannot be empty".to_string(),
            ));
        }
        url::Url::parse(&self.api_url)?;

        if self.target_lang.trim().is_empty() {
            return Err(TranslationError::ConfigError(
                "target_lang cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(TranslationError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
