use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ToggleTaskRequest;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = state.task_repo.list().await?;
    Ok(Json(tasks))
}

pub async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ToggleTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.task_repo.toggle(id, payload.is_completed).await?;
    info!("Task {} marked is_completed={}", task.id, task.is_completed);
    Ok(Json(task))
}
