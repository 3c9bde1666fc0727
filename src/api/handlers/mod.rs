pub mod auth;
pub mod chat;
pub mod health;
pub mod plant;
pub mod task;
pub mod trend;
