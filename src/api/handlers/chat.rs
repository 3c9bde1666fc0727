use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

use crate::api::dtos::requests::ChatRequest;
use crate::domain::models::message::MessageRole;
use crate::error::AppError;
use crate::state::AppState;

const SYSTEM_INSTRUCTION: &str = "You are Olivia, a helpful AI assistant specialized in \
    gardening. Provide concise and accurate information to help users take care of their plants.";

const FALLBACK_REPLY: &str = "I'm sorry, I can't connect to the gardening brain right now.";

/// Persists the user's message, asks the assistant for a reply and
/// persists that too. Only the newest message is forwarded; prior
/// turns are not sent as context. A failing or unconfigured LLM yields
/// the fallback reply rather than an error.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation("content is required".into()));
    }

    state
        .message_repo
        .create(payload.content.clone(), MessageRole::User)
        .await?;

    let reply = match &state.config.gemini_api_key {
        Some(api_key) => state
            .llm_service
            .generate(api_key, &payload.content, SYSTEM_INSTRUCTION)
            .await
            .unwrap_or_else(|e| {
                warn!("Assistant reply failed, using fallback: {}", e);
                FALLBACK_REPLY.to_string()
            }),
        None => FALLBACK_REPLY.to_string(),
    };

    let message = state
        .message_repo
        .create(reply, MessageRole::Assistant)
        .await?;
    Ok(Json(message))
}

pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.message_repo.list().await?;
    Ok(Json(messages))
}
