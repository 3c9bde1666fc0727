pub mod memory_message_repo;
pub mod memory_plant_repo;
pub mod memory_task_repo;
pub mod memory_trend_repo;
pub mod memory_user_repo;
