use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::domain::models::message::MessageRole;
use crate::domain::models::plant::NewPlant;
use crate::domain::models::task::NewTask;
use crate::domain::models::trend::NewTrend;
use crate::domain::models::user::NewUser;
use crate::domain::services::credentials::hash_password;
use crate::infra::ai::gemini_service::GeminiService;
use crate::infra::repositories::{
    memory_message_repo::MemoryMessageRepo, memory_plant_repo::MemoryPlantRepo,
    memory_task_repo::MemoryTaskRepo, memory_trend_repo::MemoryTrendRepo,
    memory_user_repo::MemoryUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing in-memory store...");

    let llm_service = Arc::new(GeminiService::new(Duration::from_secs(
        config.ai_timeout_secs,
    )));

    let state = AppState {
        config: config.clone(),
        user_repo: Arc::new(MemoryUserRepo::new()),
        plant_repo: Arc::new(MemoryPlantRepo::new()),
        trend_repo: Arc::new(MemoryTrendRepo::new()),
        task_repo: Arc::new(MemoryTaskRepo::new()),
        message_repo: Arc::new(MemoryMessageRepo::new()),
        llm_service,
    };

    seed_demo_data(&state).await;
    state
}

/// Fixed demo records inserted at process start. All state lives in
/// memory for the life of the process; there is no durability.
pub async fn seed_demo_data(state: &AppState) {
    state
        .user_repo
        .create(NewUser {
            username: "user".to_string(),
            password_hash: hash_password("password").expect("Failed to hash seed password"),
            email: Some("user@greenhouse.com".to_string()),
            organization: Some("Home Garden".to_string()),
        })
        .await
        .expect("Failed to seed user");

    for (name, species, health_status) in [
        ("Monstera", "Monstera Deliciosa", "Good"),
        ("Snake Plant", "Sansevieria", "Needs Water"),
        ("Fiddle Leaf", "Ficus Lyrata", "Good"),
    ] {
        state
            .plant_repo
            .create(NewPlant {
                name: name.to_string(),
                species: species.to_string(),
                health_status: health_status.to_string(),
                image_url: None,
            })
            .await
            .expect("Failed to seed plant");
    }

    for (title, description, source_url) in [
        (
            "Vertical Gardening",
            "Maximizing space with vertical planters is the hottest trend of 2024.",
            "https://example.com/vertical",
        ),
        (
            "Native Plants",
            "Choosing local species to support local ecosystems.",
            "https://example.com/native",
        ),
    ] {
        state
            .trend_repo
            .create(NewTrend {
                title: title.to_string(),
                description: description.to_string(),
                image_url: None,
                source_url: Some(source_url.to_string()),
            })
            .await
            .expect("Failed to seed trend");
    }

    for (title, is_completed) in [
        ("Water the Fiddle Leaf", false),
        ("Fertilize Tomatoes", true),
        ("Check pH Levels", false),
    ] {
        state
            .task_repo
            .create(NewTask {
                title: title.to_string(),
                is_completed,
                due_date: Some(Utc::now()),
            })
            .await
            .expect("Failed to seed task");
    }

    state
        .message_repo
        .create(
            "Hello! I'm Olivia, your gardening assistant. How can I help you today?".to_string(),
            MessageRole::Assistant,
        )
        .await
        .expect("Failed to seed greeting message");

    info!("Seeded demo data: 1 user, 3 plants, 2 trends, 3 tasks, 1 message");
}
