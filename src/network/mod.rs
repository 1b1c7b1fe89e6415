//! # 网络模块
//!
//! - `fetch` - 目标页面获取、字符集识别

pub mod fetch;

pub use fetch::{fetch_page, parse_content_type, FetchConfig, FetchError, FetchedPage};
