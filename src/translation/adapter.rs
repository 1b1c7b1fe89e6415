//! 翻译适配器
//!
//! 在 [`TranslationBackend`] 之上提供尽力而为的翻译语义：
//!
//! - 列表逐条翻译，单条失败时保留原文
//! - 目标语言无效且为中文时，依次尝试备用中文代码
//! - 整体失败只记录日志，由 [`TranslationAdapter::translate_texts`] 退回原文

use std::sync::Arc;

use serde::Deserialize;

use crate::translation::backend::TranslationBackend;
use crate::translation::config::{constants, TranslationConfig};
use crate::translation::error::{helpers, TranslationResult};
use crate::translation::languages;

/// 待翻译文本：单条或有序列表
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    One(String),
    Many(Vec<String>),
}

impl TextInput {
    /// 是否为空输入（空字符串或空列表）
    pub fn is_empty(&self) -> bool {
        match self {
            TextInput::One(text) => text.is_empty(),
            TextInput::Many(texts) => texts.is_empty(),
        }
    }

    /// 转换为列表；空字符串得到空列表
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TextInput::One(text) if text.is_empty() => Vec::new(),
            TextInput::One(text) => vec![text],
            TextInput::Many(texts) => texts,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::One(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::One(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        TextInput::Many(texts)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(texts: Vec<&str>) -> Self {
        TextInput::Many(texts.into_iter().map(str::to_string).collect())
    }
}

/// 一次翻译调用的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub texts: Option<TextInput>,
    pub from_lang: String,
    pub to_lang: String,
}

impl TranslationRequest {
    /// 使用默认语言（`auto` → `zh-cn`）创建请求
    pub fn new(texts: Option<TextInput>) -> Self {
        Self {
            texts,
            from_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            to_lang: constants::DEFAULT_TARGET_LANG.to_string(),
        }
    }

    pub fn from_lang(mut self, lang: impl Into<String>) -> Self {
        self.from_lang = lang.into();
        self
    }

    pub fn to_lang(mut self, lang: impl Into<String>) -> Self {
        self.to_lang = lang.into();
        self
    }
}

/// 翻译适配器
#[derive(Clone)]
pub struct TranslationAdapter {
    backend: Arc<dyn TranslationBackend>,
    fallback_locales: Vec<String>,
}

impl TranslationAdapter {
    pub fn new(backend: Arc<dyn TranslationBackend>, config: &TranslationConfig) -> Self {
        Self {
            backend,
            fallback_locales: config.fallback_locales.clone(),
        }
    }

    /// 翻译文本
    ///
    /// 返回 `None` 表示整体失败（原因已记录日志）；空输入直接返回空列表，不调用后端。
    pub fn translate(&self, request: &TranslationRequest) -> Option<Vec<String>> {
        let texts = match &request.texts {
            Some(texts) if !texts.is_empty() => texts,
            _ => return Some(Vec::new()),
        };

        match self.translate_once(texts, &request.from_lang, &request.to_lang) {
            Ok(translated) => Some(translated),
            Err(e) if e.is_invalid_destination() => {
                tracing::warn!("翻译接口参数错误: {}", e);
                if languages::is_chinese_variant(&request.to_lang) {
                    self.sweep_chinese_locales(texts, &request.from_lang)
                } else {
                    None
                }
            }
            Err(e) => {
                tracing::error!("翻译请求失败: {}", e);
                None
            }
        }
    }

    /// 翻译文本，失败时返回原文
    ///
    /// 永不失败：适配器整体失败时把输入原样转换为列表返回。
    pub fn translate_texts(&self, request: TranslationRequest) -> Vec<String> {
        if let Some(translated) = self.translate(&request) {
            return translated;
        }

        tracing::warn!("翻译失败，返回原始文本");
        request.texts.map(TextInput::into_vec).unwrap_or_default()
    }

    /// 依次尝试备用中文代码，第一个成功的结果即为最终结果
    fn sweep_chinese_locales(&self, texts: &TextInput, from_lang: &str) -> Option<Vec<String>> {
        for locale in &self.fallback_locales {
            match self.translate_once(texts, from_lang, locale) {
                Ok(translated) => {
                    tracing::info!("使用备用语言代码 {} 翻译成功", locale);
                    return Some(translated);
                }
                Err(e) => tracing::debug!("备用语言代码 {} 失败: {}", locale, e),
            }
        }

        tracing::error!("尝试其他中文代码也失败");
        None
    }

    /// 不做代码轮换的单轮翻译
    ///
    /// 列表中单条失败时保留原文；但目标语言无效对每条都成立，
    /// 因此遇到该错误时立即中止并返回错误。
    fn translate_once(
        &self,
        texts: &TextInput,
        from_lang: &str,
        to_lang: &str,
    ) -> TranslationResult<Vec<String>> {
        match texts {
            TextInput::One(text) => {
                let translated = self.backend.translate(text, from_lang, to_lang)?;
                Ok(vec![translated])
            }
            TextInput::Many(items) => {
                let mut results = Vec::with_capacity(items.len());
                for text in items {
                    if text.is_empty() {
                        results.push(String::new());
                        continue;
                    }

                    match self.backend.translate(text, from_lang, to_lang) {
                        Ok(translated) => results.push(translated),
                        Err(e) if e.is_invalid_destination() => return Err(e),
                        Err(e) => {
                            helpers::log_error(&e.with_context(text));
                            results.push(text.clone());
                        }
                    }
                }
                Ok(results)
            }
        }
    }
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("fallback_locales", &self.fallback_locales)
            .finish_non_exhaustive()
    }
}
