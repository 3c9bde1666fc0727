use crate::domain::models::{
    message::{Message, MessageRole},
    plant::{NewPlant, Plant},
    task::{NewTask, Task},
    trend::{NewTrend, Trend},
    user::{NewUser, User, UserPatch},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    /// Merges the patch over the stored user, last write wins per field.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError>;
}

#[async_trait]
pub trait PlantRepository: Send + Sync {
    async fn create(&self, plant: NewPlant) -> Result<Plant, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Plant>, AppError>;
    async fn list(&self) -> Result<Vec<Plant>, AppError>;
}

#[async_trait]
pub trait TrendRepository: Send + Sync {
    async fn create(&self, trend: NewTrend) -> Result<Trend, AppError>;
    async fn list(&self) -> Result<Vec<Trend>, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: NewTask) -> Result<Task, AppError>;
    async fn list(&self) -> Result<Vec<Task>, AppError>;
    /// Sets `is_completed` to exactly `is_completed` — the caller
    /// supplies the new value, this is not a flip.
    async fn toggle(&self, id: i64, is_completed: bool) -> Result<Task, AppError>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores the message and stamps it with the current time. The
    /// repository is the sole owner of message timestamps.
    async fn create(&self, content: String, role: MessageRole) -> Result<Message, AppError>;
    /// All messages, ascending by timestamp.
    async fn list(&self) -> Result<Vec<Message>, AppError>;
}

#[async_trait]
pub trait LlmService: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, AppError>;
}
