use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::TrendQuery;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_trends(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrendQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut trends = state.trend_repo.list().await?;
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        trends.retain(|t| t.matches(search));
    }
    Ok(Json(trends))
}
