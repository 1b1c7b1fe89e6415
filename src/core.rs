//! 标签处理流程
//!
//! 获取页面 → 解析 → 提取标签 → 批量翻译标签名。
//! 所有函数都是阻塞的，在 Web 层通过 `spawn_blocking` 调用。

use crate::config::AppConfig;
use crate::network::{fetch_page, FetchError};
use crate::parsers::html::{extract_tags_with_charset, TagRecord};
use crate::translation::{TextInput, TranslationAdapter, TranslationRequest};

/// 按位置把译名写回标签
///
/// 译名少于标签时，多出的标签以自身的 `tag_name` 作为译名。
pub fn apply_translations(tags: Vec<TagRecord>, translated: Vec<String>) -> Vec<TagRecord> {
    let mut translated = translated.into_iter();

    tags.into_iter()
        .map(|tag| match translated.next() {
            Some(name) => tag.with_translation(name),
            None => {
                let name = tag.tag_name.clone();
                tag.with_translation(name)
            }
        })
        .collect()
}

/// 批量翻译标签名
///
/// 没有标签时不调用翻译。
pub fn translate_tags(
    adapter: &TranslationAdapter,
    tags: Vec<TagRecord>,
    from_lang: &str,
    to_lang: &str,
) -> Vec<TagRecord> {
    if tags.is_empty() {
        return tags;
    }

    let names: Vec<String> = tags.iter().map(|tag| tag.tag_name.clone()).collect();
    let request = TranslationRequest::new(Some(TextInput::Many(names)))
        .from_lang(from_lang)
        .to_lang(to_lang);
    let translated = adapter.translate_texts(request);

    if translated.len() < tags.len() {
        tracing::warn!(
            "译名数量 {} 少于标签数量 {}，缺失部分使用原名",
            translated.len(),
            tags.len()
        );
    }

    apply_translations(tags, translated)
}

/// 获取页面并提取、翻译其中的标签
pub fn extract_page_tags(
    config: &AppConfig,
    adapter: &TranslationAdapter,
    url: &str,
) -> Result<Vec<TagRecord>, FetchError> {
    let page = fetch_page(&config.fetch, url)?;
    let tags = extract_tags_with_charset(&page.body, page.charset.as_deref());

    tracing::info!("从 {} 提取到 {} 个标签", page.url, tags.len());

    Ok(translate_tags(
        adapter,
        tags,
        &config.translation.source_lang,
        &config.translation.target_lang,
    ))
}
