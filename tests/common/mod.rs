// 集成测试公共模块
//
// 提供模拟翻译后端、HTML 样例和本地页面服务器

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use tag_translator::config::AppConfig;
use tag_translator::translation::{TranslationBackend, TranslationError, TranslationResult};
use tag_translator::web::{create_router, AppState};

/// 按词典翻译，词典外的文本返回 `<目标语言>:<原文>`
#[derive(Default)]
pub struct DictionaryBackend {
    entries: HashMap<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl DictionaryBackend {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的 (文本, 目标语言) 调用
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TranslationBackend for DictionaryBackend {
    fn translate(&self, text: &str, _from_lang: &str, to_lang: &str) -> TranslationResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), to_lang.to_string()));

        Ok(self
            .entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("{}:{}", to_lang, text)))
    }
}

/// 总是失败的后端
pub struct FailingBackend;

impl TranslationBackend for FailingBackend {
    fn translate(&self, _text: &str, _from_lang: &str, _to_lang: &str) -> TranslationResult<String> {
        Err(TranslationError::NetworkError("connection refused".to_string()))
    }
}

/// 只对指定文本失败的后端
pub struct FlakyBackend {
    pub failing: Vec<String>,
}

impl TranslationBackend for FlakyBackend {
    fn translate(&self, text: &str, _from_lang: &str, to_lang: &str) -> TranslationResult<String> {
        if self.failing.iter().any(|f| f == text) {
            Err(TranslationError::ServiceError("HTTP 503".to_string()))
        } else {
            Ok(format!("{}:{}", to_lang, text))
        }
    }
}

/// 只接受特定目标语言代码的后端，记录尝试过的代码
pub struct LocaleStrictBackend {
    accepted: Vec<String>,
    attempts: Mutex<Vec<String>>,
}

impl LocaleStrictBackend {
    pub fn accepting(accepted: &[&str]) -> Self {
        Self {
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl TranslationBackend for LocaleStrictBackend {
    fn translate(&self, text: &str, _from_lang: &str, to_lang: &str) -> TranslationResult<String> {
        self.attempts.lock().unwrap().push(to_lang.to_string());

        if self.accepted.iter().any(|a| a == to_lang) {
            Ok(format!("{}:{}", to_lang, text))
        } else {
            Err(TranslationError::InvalidDestinationLanguage(
                to_lang.to_string(),
            ))
        }
    }
}

/// HTML 样例
pub struct HtmlFixtures;

impl HtmlFixtures {
    pub fn single_tag() -> &'static str {
        r#"<div data-tag-name="cute_girl" data-is-deprecated="true"><a>x</a><span class="post-count" title="42"></span></div>"#
    }

    pub fn tag_list() -> &'static str {
        r#"<!DOCTYPE html>
<html>
<head><title>Tags</title></head>
<body>
  <ul class="tag-list">
    <li class="tag-type-0" data-tag-name="long_hair" data-is-deprecated="false">
      <a class="wiki-link" href="/wiki_pages/long_hair">?</a>
      <a class="search-tag" href="/posts?tags=long_hair"> long hair </a>
      <span class="post-count" title="4500000">4.5M</span>
    </li>
    <li class="tag-type-4" data-tag-name="hatsune_miku">
      <a class="search-tag" href="/posts?tags=hatsune_miku">hatsune miku</a>
    </li>
    <li class="tag-type-0" data-tag-name="blue_eyes" data-is-deprecated="true">
      <span class="post-count">1.2M</span>
    </li>
  </ul>
</body>
</html>"#
    }

    pub fn without_tags() -> &'static str {
        "<html><body><p>nothing to see here</p></body></html>"
    }
}

/// 使用给定后端构建应用状态
pub fn test_state(backend: Arc<dyn TranslationBackend>) -> Arc<AppState> {
    let mut config = AppConfig::default();
    config.fetch.timeout_secs = 5;
    Arc::new(AppState::new(config, backend))
}

/// 使用给定后端构建路由器
pub fn test_router(backend: Arc<dyn TranslationBackend>) -> Router {
    create_router(test_state(backend))
}

/// 启动本地页面服务器，返回其地址
pub async fn spawn_page_server() -> SocketAddr {
    let app = Router::new()
        .route(
            "/tags",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    HtmlFixtures::tag_list(),
                )
            }),
        )
        .route(
            "/empty",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    HtmlFixtures::without_tags(),
                )
            }),
        )
        .route(
            "/sjis",
            get(|| async {
                let (body, _, _) = encoding_rs::SHIFT_JIS
                    .encode(r#"<p data-tag-name="猫耳"><a>ねこ</a></p>"#);
                (
                    [(header::CONTENT_TYPE, "text/html; charset=Shift_JIS")],
                    body.into_owned(),
                )
            }),
        )
        .route(
            "/sjis-meta",
            get(|| async {
                let (body, _, _) = encoding_rs::SHIFT_JIS.encode(
                    r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS"></head><body><p data-tag-name="猫_耳"><a>ねこ</a></p></body></html>"#,
                );
                ([(header::CONTENT_TYPE, "text/html")], body.into_owned())
            }),
        )
        .route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, "not found").into_response() }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// 把目标地址编码进 `/extract_tags` 的查询参数
pub fn extract_tags_uri(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("/extract_tags?url={}", encoded)
}
