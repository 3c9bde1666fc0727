use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{LoginRequest, UpdateProfileRequest};
use crate::domain::models::user::{NewUser, UserPatch};
use crate::domain::services::credentials::{hash_password, verify_password};
use crate::error::AppError;
use crate::state::AppState;

/// Login doubles as registration: an unknown username is created on
/// the spot with the supplied credentials.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("username and password are required".into()));
    }

    match state.user_repo.find_by_username(&payload.username).await? {
        Some(user) => {
            verify_password(&payload.password, &user.password_hash)?;
            info!("User logged in: {}", user.id);
            Ok(Json(user))
        }
        None => {
            let user = state
                .user_repo
                .create(NewUser {
                    email: Some(format!("{}@greenhouse.com", payload.username)),
                    organization: Some("Home Garden".to_string()),
                    password_hash: hash_password(&payload.password)?,
                    username: payload.username,
                })
                .await?;
            info!("Created user on first login: {}", user.id);
            Ok(Json(user))
        }
    }
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let patch = UserPatch {
        username: payload.username,
        password_hash: payload.password.as_deref().map(hash_password).transpose()?,
        email: payload.email,
        organization: payload.organization,
    };

    let user = state.user_repo.update(id, patch).await?;
    info!("Updated profile for user: {}", user.id);
    Ok(Json(user))
}
