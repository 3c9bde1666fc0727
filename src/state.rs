use crate::config::Config;
use crate::domain::ports::{
    LlmService, MessageRepository, PlantRepository, TaskRepository, TrendRepository,
    UserRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub plant_repo: Arc<dyn PlantRepository>,
    pub trend_repo: Arc<dyn TrendRepository>,
    pub task_repo: Arc<dyn TaskRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
    pub llm_service: Arc<dyn LlmService>,
}
