//! HTTP 接口集成测试

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{
    extract_tags_uri, spawn_page_server, test_router, DictionaryBackend, FailingBackend,
};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/Tagtranslate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_requires_url() {
    let app = test_router(Arc::new(DictionaryBackend::default()));

    let (status, body) = send(app.clone(), get("/extract_tags")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing URL parameter"}));

    let (status, body) = send(app, get("/extract_tags?url=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing URL parameter"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_translates_page() {
    let addr = spawn_page_server().await;
    let backend = Arc::new(DictionaryBackend::new(&[
        ("long hair", "长发"),
        ("hatsune miku", "初音未来"),
    ]));
    let app = test_router(backend.clone());

    let target = format!("http://{}/tags", addr);
    let (status, body) = send(app, get(&extract_tags_uri(&target))).await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags.len(), 3);

    assert_eq!(tags[0]["tag_name"], "long hair");
    assert_eq!(tags[0]["translated_tag_name"], "长发");
    assert_eq!(tags[0]["post_count"], "4500000");
    assert_eq!(tags[0]["links"], json!(["?", "long hair"]));
    assert_eq!(tags[1]["translated_tag_name"], "初音未来");
    assert_eq!(tags[2]["tag_name"], "blue eyes");
    assert_eq!(tags[2]["is_deprecated"], true);
    assert_eq!(tags[2]["post_count"], Value::Null);

    // 一个标签一次调用，顺序与页面一致
    let texts: Vec<String> = backend.calls().into_iter().map(|(text, _)| text).collect();
    assert_eq!(texts, vec!["long hair", "hatsune miku", "blue eyes"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_page_without_tags() {
    let addr = spawn_page_server().await;
    let backend = Arc::new(DictionaryBackend::default());
    let app = test_router(backend.clone());

    let target = format!("http://{}/empty", addr);
    let (status, body) = send(app, get(&extract_tags_uri(&target))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(backend.calls().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_uses_declared_charset() {
    let addr = spawn_page_server().await;
    let app = test_router(Arc::new(DictionaryBackend::new(&[("猫耳", "cat ears")])));

    let target = format!("http://{}/sjis", addr);
    let (status, body) = send(app, get(&extract_tags_uri(&target))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["tag_name"], "猫耳");
    assert_eq!(body[0]["links"], json!(["ねこ"]));
    assert_eq!(body[0]["translated_tag_name"], "cat ears");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_uses_meta_charset() {
    let addr = spawn_page_server().await;
    let backend = Arc::new(DictionaryBackend::new(&[("猫 耳", "cat ears")]));
    let app = test_router(backend.clone());

    let target = format!("http://{}/sjis-meta", addr);
    let (status, body) = send(app, get(&extract_tags_uri(&target))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["tag_name"], "猫 耳");
    assert_eq!(body[0]["links"], json!(["ねこ"]));
    assert_eq!(body[0]["translated_tag_name"], "cat ears");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_translation_failure_keeps_names() {
    let addr = spawn_page_server().await;
    let app = test_router(Arc::new(FailingBackend));

    let target = format!("http://{}/tags", addr);
    let (status, body) = send(app, get(&extract_tags_uri(&target))).await;

    assert_eq!(status, StatusCode::OK);
    for tag in body.as_array().unwrap() {
        assert_eq!(tag["translated_tag_name"], tag["tag_name"]);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_tags_upstream_errors() {
    let addr = spawn_page_server().await;
    let app = test_router(Arc::new(DictionaryBackend::default()));

    let targets = [
        format!("http://{}/gone", addr),
        "http://unreachable.invalid/".to_string(),
        "not a url".to_string(),
    ];

    for target in targets {
        let (status, body) = send(app.clone(), get(&extract_tags_uri(&target))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "target {}", target);
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
    }
}

#[tokio::test]
async fn test_tag_translate_list() {
    let app = test_router(Arc::new(DictionaryBackend::new(&[("cat", "猫")])));

    let (status, body) = send(app, post_json(r#"{"texts": ["cat", "", "dog"]}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"translated_texts": ["猫", "", "zh-cn:dog"]})
    );
}

#[tokio::test]
async fn test_tag_translate_single_string() {
    let app = test_router(Arc::new(DictionaryBackend::new(&[("cat", "猫")])));

    let (status, body) = send(app, post_json(r#"{"texts": "cat"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"translated_texts": ["猫"]}));
}

#[tokio::test]
async fn test_tag_translate_failure_returns_input() {
    let app = test_router(Arc::new(FailingBackend));

    let (status, body) = send(app, post_json(r#"{"texts": ["a", "b"]}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"translated_texts": ["a", "b"]}));
}

#[tokio::test]
async fn test_tag_translate_missing_texts() {
    let backend = Arc::new(DictionaryBackend::default());
    let app = test_router(backend.clone());

    for payload in [r#"{}"#, r#"{"texts": []}"#, r#"{"texts": ""}"#, "not json"] {
        let (status, body) = send(app.clone(), post_json(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body, json!({"error": "Missing texts parameter"}));
    }

    let (status, body) = send(app, post_json(r#"{"texts": {"a": 1}}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid texts parameter"}));

    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let app = test_router(Arc::new(DictionaryBackend::default()));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}
