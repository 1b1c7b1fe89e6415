//! # Tag Translator
//!
//! 抓取网页中的标签元数据，并把标签名翻译为目标语言。
//!
//! ## 模块组织
//!
//! - `core` - 获取、提取、翻译的处理流程
//! - `parsers` - HTML 解析与标签提取
//! - `network` - 页面获取
//! - `translation` - 翻译后端与带回退语义的适配器
//! - `web` - HTTP 接口
//! - `config` / `env` - 配置加载

pub mod config;
pub mod core;
pub mod env;
pub mod network;
pub mod parsers;
pub mod translation;
pub mod web;

pub use crate::config::{load_config, AppConfig};
pub use crate::core::{extract_page_tags, translate_tags};
pub use crate::parsers::{extract_tags, TagRecord};
pub use crate::translation::{TranslationAdapter, TranslationRequest};
