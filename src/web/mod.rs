//! Web 服务器模块
//!
//! 提供标签提取和文本翻译两个 HTTP 接口

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

pub use self::config::*;
pub use error::ApiError;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::translation::{GoogleTranslator, TranslationBackend};

/// Web 服务器
pub struct WebServer {
    state: Arc<AppState>,
}

impl WebServer {
    /// 使用默认的 Google 翻译后端创建服务器
    pub fn new(config: AppConfig) -> Self {
        let backend = Arc::new(GoogleTranslator::new(&config.translation));
        Self::with_backend(config, backend)
    }

    /// 使用指定的翻译后端创建服务器
    pub fn with_backend(config: AppConfig, backend: Arc<dyn TranslationBackend>) -> Self {
        Self {
            state: Arc::new(AppState::new(config, backend)),
        }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> std::io::Result<()> {
        let address = self.state.config.web.listen_address();
        let app = create_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&address).await?;

        tracing::info!("Web server starting at http://{}", listener.local_addr()?);

        axum::serve(listener, app).await
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
