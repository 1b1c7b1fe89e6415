//! 进程级环境变量
//!
//! 只覆盖启动前就需要知道的值（配置文件路径、日志级别）；
//! 其余配置通过 [`crate::config`] 分层加载。

use std::env;

use thiserror::Error;

/// 环境变量解析错误
#[derive(Debug, Clone, Error)]
#[error("Environment variable '{variable}': {message}")]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn default_value() -> Option<T>;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::default_value().ok_or_else(|| EnvError {
                variable: Self::NAME.to_string(),
                message: "Required environment variable not set".to_string(),
            }),
        }
    }
}

/// 配置文件路径
pub struct ConfigPath;
impl EnvVar<String> for ConfigPath {
    const NAME: &'static str = "TAG_TRANSLATOR_CONFIG";
    const DESCRIPTION: &'static str = "Path of the YAML/TOML config file";

    fn default_value() -> Option<String> {
        Some("config.yaml".to_string())
    }

    fn parse(value: &str) -> EnvResult<String> {
        let path = value.trim();
        if path.is_empty() {
            return Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Path cannot be empty".to_string(),
            });
        }
        Ok(path.to_string())
    }
}

/// 日志级别
pub struct LogLevel;
impl EnvVar<String> for LogLevel {
    const NAME: &'static str = "TAG_TRANSLATOR_LOG_LEVEL";
    const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

    fn default_value() -> Option<String> {
        Some("info".to_string())
    }

    fn parse(value: &str) -> EnvResult<String> {
        match value.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
            _ => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: format!(
                    "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                    value
                ),
            }),
        }
    }
}

/// 生成环境变量说明，用于 `--help`
pub fn describe() -> String {
    [
        (ConfigPath::NAME, ConfigPath::DESCRIPTION),
        (LogLevel::NAME, LogLevel::DESCRIPTION),
        (
            "TAG_TRANSLATOR__<SECTION>__<KEY>",
            "Override any config value, e.g. TAG_TRANSLATOR__WEB__PORT=8080",
        ),
    ]
    .iter()
    .map(|(name, description)| format!("    {:<34} {}", name, description))
    .collect::<Vec<_>>()
    .join("\n")
}
