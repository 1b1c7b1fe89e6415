//! # 解析器模块
//!
//! 目前只包含 HTML 解析：
//!
//! - `html` - HTML文档解析、DOM遍历、标签提取

pub mod html;

pub use html::{extract_tags, extract_tags_with_charset, html_to_dom, TagRecord};
