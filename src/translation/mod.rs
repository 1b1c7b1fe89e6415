//! 翻译模块
//!
//! - **backend**: 外部翻译能力接口及 Google 实现
//! - **adapter**: 带回退语义的翻译适配器
//! - **languages**: 语言代码表
//! - **config**: 翻译配置
//! - **error**: 错误类型
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tag_translator::translation::{
//!     GoogleTranslator, TranslationAdapter, TranslationConfig, TranslationRequest,
//! };
//!
//! let config = TranslationConfig::default();
//! let adapter = TranslationAdapter::new(Arc::new(GoogleTranslator::new(&config)), &config);
//! let texts = adapter.translate_texts(TranslationRequest::new(Some("cute girl".into())));
//! assert_eq!(texts.len(), 1);
//! ```

pub mod adapter;
pub mod backend;
pub mod config;
pub mod error;
pub mod languages;

pub use adapter::{TextInput, TranslationAdapter, TranslationRequest};
pub use backend::{GoogleTranslator, TranslationBackend};
pub use self::config::TranslationConfig;
pub use error::{TranslationError, TranslationResult};
