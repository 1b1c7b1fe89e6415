//! 页面获取
//!
//! 使用阻塞式 reqwest 客户端获取目标页面。每次调用都新建客户端，
//! 非 2xx 状态码视为失败。

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// 页面获取配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// 请求超时（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// 页面获取错误
///
/// `Display` 输出直接作为 HTTP 500 响应中的错误信息。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// 获取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    /// `Content-Type` 中声明的字符集
    pub charset: Option<String>,
    pub body: Vec<u8>,
}

/// 获取页面内容
pub fn fetch_page(config: &FetchConfig, target: &str) -> Result<FetchedPage, FetchError> {
    let url = Url::parse(target).map_err(|source| FetchError::InvalidUrl {
        url: target.to_string(),
        source,
    })?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    let response = client.get(url).send()?.error_for_status()?;

    let final_url = response.url().clone();
    let charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(parse_content_type)
        .map(|(_, charset)| charset)
        .filter(|charset| !charset.is_empty());
    let body = response.bytes()?.to_vec();

    tracing::debug!("已获取 {} ({} 字节)", final_url, body.len());

    Ok(FetchedPage {
        url: final_url,
        charset,
        body,
    })
}

/// 解析 `Content-Type`，返回 (媒体类型, 字符集)
pub fn parse_content_type(content_type: &str) -> (String, String) {
    let mut parts = content_type.split(';');
    let media_type = parts.next().unwrap_or_default().trim().to_lowercase();
    let mut charset = String::new();

    for part in parts {
        let part = part.trim();
        if let Some(value) = part
            .strip_prefix("charset=")
            .or_else(|| part.strip_prefix("CHARSET="))
        {
            charset = value.trim_matches('"').to_string();
        }
    }

    (media_type, charset)
}
