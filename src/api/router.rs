use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};
use uuid::Uuid;

use crate::api::contract;
use crate::api::handlers::{auth, chat, health, plant, task, trend};
use crate::state::AppState;

/// Paths come from the route contract, so the wire surface and the
/// contract table are the same declaration.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Auth / profile
        .route(contract::LOGIN.path, post(auth::login))
        .route(contract::GET_USER.path, get(auth::get_user).put(auth::update_profile))
        // Plants
        .route(contract::LIST_PLANTS.path, get(plant::list_plants))
        .route(contract::GET_PLANT.path, get(plant::get_plant))
        // Trends
        .route(contract::LIST_TRENDS.path, get(trend::list_trends))
        // Tasks
        .route(contract::LIST_TASKS.path, get(task::list_tasks))
        .route(contract::TOGGLE_TASK.path, patch(task::toggle_task))
        // Chat
        .route(contract::SEND_CHAT_MESSAGE.path, post(chat::send_message))
        .route(contract::GET_CHAT_HISTORY.path, get(chat::get_history))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                ),
        )
        .with_state(state)
}
