//! 应用配置
//!
//! 启动时加载一次，之后作为不可变对象注入各组件。加载顺序（后者覆盖前者）：
//!
//! 1. 内置默认值
//! 2. 配置文件（YAML/TOML，按扩展名识别，可以不存在）
//! 3. `TAG_TRANSLATOR__<SECTION>__<KEY>` 环境变量

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::FetchConfig;
use crate::translation::TranslationConfig;
use crate::web::WebConfig;

pub const ENV_PREFIX: &str = "TAG_TRANSLATOR";
pub const ENV_SEPARATOR: &str = "__";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub web: WebConfig,
    pub fetch: FetchConfig,
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// 验证配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.web.validate().map_err(ConfigError::Invalid)?;

        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "fetch.timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.translation
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// 从配置文件和环境变量加载配置
///
/// 不做验证：调用方应用命令行覆盖之后再调用 [`AppConfig::validate`]。
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    tracing::debug!("配置加载完成: {:?}", config);
    Ok(config)
}
