//! 翻译后端
//!
//! [`TranslationBackend`] 是外部翻译能力的接口，[`GoogleTranslator`] 是默认实现，
//! 通过 Google 翻译的公开接口完成单条文本翻译。

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::translation::config::TranslationConfig;
use crate::translation::error::{helpers, TranslationError, TranslationResult};
use crate::translation::languages::{self, AUTO};

/// 外部翻译能力
///
/// 实现必须可以在多个请求间安全共享；单次调用失败以错误形式返回，不得 panic。
pub trait TranslationBackend: Send + Sync {
    /// 将 `text` 从 `from_lang` 翻译为 `to_lang`
    fn translate(&self, text: &str, from_lang: &str, to_lang: &str) -> TranslationResult<String>;
}

/// Google 翻译后端
///
/// 只保存静态配置，每次调用都新建 HTTP 客户端，不在调用之间共享可变状态。
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    api_url: String,
    timeout: Duration,
    user_agent: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslationConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    /// 校验并规范化源语言和目标语言
    fn resolve_languages(from_lang: &str, to_lang: &str) -> TranslationResult<(String, String)> {
        let source = languages::normalize(from_lang);
        if source != AUTO && !languages::is_supported(&source) {
            return Err(TranslationError::InvalidSourceLanguage(from_lang.to_string()));
        }

        let target = languages::normalize(to_lang);
        if !languages::is_supported(&target) {
            return Err(TranslationError::InvalidDestinationLanguage(
                to_lang.to_string(),
            ));
        }

        Ok((source, target))
    }

    fn build_url(&self, text: &str, source: &str, target: &str) -> TranslationResult<Url> {
        let sl = languages::wire_code(source);
        let tl = languages::wire_code(target);
        let url = Url::parse_with_params(
            &self.api_url,
            &[
                ("client", "gtx"),
                ("sl", sl.as_str()),
                ("tl", tl.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )?;
        Ok(url)
    }
}

impl TranslationBackend for GoogleTranslator {
    fn translate(&self, text: &str, from_lang: &str, to_lang: &str) -> TranslationResult<String> {
        let (source, target) = Self::resolve_languages(from_lang, to_lang)?;
        let url = self.build_url(text, &source, &target)?;

        tracing::debug!("请求翻译: {} ({} -> {})", text, source, target);

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;

        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(helpers::service_error(format!(
                "翻译接口返回状态码 {}",
                status
            )));
        }

        let body = response.text()?;
        let json: Value = serde_json::from_str(&body)?;
        parse_translation_response(&json)
    }
}

/// 解析 Google 翻译响应
///
/// 响应的第 0 项是分段数组，每段的第 0 项是译文片段，需要按顺序拼接。
pub fn parse_translation_response(json: &Value) -> TranslationResult<String> {
    let segments = json.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        TranslationError::ParseError("响应格式无效: 缺少分段数组".to_string())
    })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(helpers::service_error("翻译结果为空"));
    }

    Ok(translation)
}
