//! HTML解析和处理模块
//!
//! - `dom`: 基础DOM操作
//! - `metadata`: 字符集声明识别
//! - `tags`: 标签元数据提取

pub mod dom;
pub mod metadata;
pub mod tags;

pub use dom::{
    find_descendants, find_nodes_with_attr, get_node_attr, get_node_name, has_class, html_to_dom,
    text_content,
};
pub use metadata::{get_charset, parse_html};
pub use tags::{extract_tags, extract_tags_with_charset, TagRecord};
