use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use greenhouse_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::LlmService,
    error::AppError,
    infra::factory::seed_demo_data,
    infra::repositories::{
        memory_message_repo::MemoryMessageRepo, memory_plant_repo::MemoryPlantRepo,
        memory_task_repo::MemoryTaskRepo, memory_trend_repo::MemoryTrendRepo,
        memory_user_repo::MemoryUserRepo,
    },
    state::AppState,
};

pub struct MockLlmService;

#[async_trait]
impl LlmService for MockLlmService {
    async fn generate(
        &self,
        _api_key: &str,
        _prompt: &str,
        _system_instruction: &str,
    ) -> Result<String, AppError> {
        Ok("Mock reply: water it sparingly.".to_string())
    }
}

/// Simulates the text-generation service being down.
pub struct FailingLlmService;

#[async_trait]
impl LlmService for FailingLlmService {
    async fn generate(
        &self,
        _api_key: &str,
        _prompt: &str,
        _system_instruction: &str,
    ) -> Result<String, AppError> {
        Err(AppError::ExternalService("connection refused".into()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_llm(Arc::new(MockLlmService)).await
    }

    pub async fn with_llm(llm_service: Arc<dyn LlmService>) -> Self {
        let config = Config {
            port: 0,
            gemini_api_key: Some("test-key".to_string()),
            ai_timeout_secs: 1,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(MemoryUserRepo::new()),
            plant_repo: Arc::new(MemoryPlantRepo::new()),
            trend_repo: Arc::new(MemoryTrendRepo::new()),
            task_repo: Arc::new(MemoryTaskRepo::new()),
            message_repo: Arc::new(MemoryMessageRepo::new()),
            llm_service,
        });

        seed_demo_data(&state).await;

        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
