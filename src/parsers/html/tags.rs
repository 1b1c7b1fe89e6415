//! 标签提取
//!
//! 从带有 `data-tag-name` 属性的元素中提取标签信息：
//!
//! ```html
//! <li data-tag-name="cute_girl" data-is-deprecated="false">
//!   <a href="/wiki/cute_girl">?</a>
//!   <a href="/posts?tags=cute_girl">cute girl</a>
//!   <span class="post-count" title="123456">123k</span>
//! </li>
//! ```

use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

use super::dom::{find_descendants, find_nodes_with_attr, get_node_attr, has_class, text_content};
use super::metadata::parse_html;

pub const TAG_NAME_ATTR: &str = "data-tag-name";
pub const DEPRECATED_ATTR: &str = "data-is-deprecated";
pub const POST_COUNT_CLASS: &str = "post-count";

/// 单个标签的信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub tag_name: String,
    pub is_deprecated: bool,
    pub links: Vec<String>,
    pub post_count: Option<String>,
    pub translated_tag_name: String,
}

impl TagRecord {
    /// 返回带有译名的新记录
    pub fn with_translation(self, translated_tag_name: impl Into<String>) -> Self {
        Self {
            translated_tag_name: translated_tag_name.into(),
            ..self
        }
    }
}

/// 从 HTML 中提取标签，字符集取自文档内的 meta 声明（默认 UTF-8）
pub fn extract_tags(html: impl AsRef<[u8]>) -> Vec<TagRecord> {
    extract_tags_with_charset(html.as_ref(), None)
}

/// 解码 HTML 并提取标签
///
/// `charset` 为外部声明的字符集（如响应头），为 `None` 时识别文档内的声明。
/// 译名尚未计算，`translated_tag_name` 与 `tag_name` 相同。
pub fn extract_tags_with_charset(html: &[u8], charset: Option<&str>) -> Vec<TagRecord> {
    let dom = parse_html(html, charset);

    find_nodes_with_attr(&dom.document, TAG_NAME_ATTR)
        .iter()
        .filter_map(tag_from_element)
        .collect()
}

fn tag_from_element(element: &Handle) -> Option<TagRecord> {
    let tag_name = get_node_attr(element, TAG_NAME_ATTR)?.replace('_', " ");
    let is_deprecated = get_node_attr(element, DEPRECATED_ATTR).as_deref() == Some("true");

    let links = find_descendants(element, "a")
        .iter()
        .map(|a| text_content(a).trim().to_string())
        .collect();

    let post_count = find_descendants(element, "span")
        .into_iter()
        .find(|span| has_class(span, POST_COUNT_CLASS))
        .and_then(|span| get_node_attr(&span, "title"));

    Some(TagRecord {
        translated_tag_name: tag_name.clone(),
        tag_name,
        is_deprecated,
        links,
        post_count,
    })
}
