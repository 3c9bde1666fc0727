use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_plants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let plants = state.plant_repo.list().await?;
    Ok(Json(plants))
}

pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let plant = state
        .plant_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Plant not found".into()))?;
    Ok(Json(plant))
}
