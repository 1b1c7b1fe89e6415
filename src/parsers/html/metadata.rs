//! 文档元数据：字符集声明

use encoding_rs::{Encoding, UTF_8};
use markup5ever_rcdom::{Handle, RcDom};

use super::dom::{find_descendants, get_node_attr, html_to_dom};
use crate::network::parse_content_type;

/// 从 meta 标签中提取字符编码声明
///
/// 支持两种格式：
/// 1. `<meta charset="utf-8">`
/// 2. `<meta http-equiv="content-type" content="text/html; charset=utf-8">`
///
/// 只看第一个带有声明的 meta 标签。
pub fn get_charset(node: &Handle) -> Option<String> {
    for meta_node in find_descendants(node, "meta").iter() {
        if let Some(charset) = get_node_attr(meta_node, "charset") {
            return Some(charset.trim().to_string());
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(content) = get_node_attr(meta_node, "content") {
                let (_media_type, charset) = parse_content_type(&content);
                return Some(charset);
            }
        }
    }

    None
}

/// 解析文档，按需识别字符集
///
/// 传入的 `charset`（通常来自 `Content-Type` 响应头）优先；
/// 未声明时先按 UTF-8 解析，再根据文档内的 meta 声明重新解码。
pub fn parse_html(data: &[u8], charset: Option<&str>) -> RcDom {
    if let Some(charset) = charset.filter(|c| !c.is_empty()) {
        return html_to_dom(data, charset);
    }

    let dom = html_to_dom(data, UTF_8.name());

    let declared = match get_charset(&dom.document) {
        Some(declared) if !declared.is_empty() => declared,
        _ => return dom,
    };

    match Encoding::for_label_no_replacement(declared.as_bytes()) {
        Some(encoding) if encoding != UTF_8 => {
            tracing::debug!("按文档声明的字符集 {} 重新解析", encoding.name());
            html_to_dom(data, encoding.name())
        }
        _ => dom,
    }
}
