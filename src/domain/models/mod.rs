pub mod message;
pub mod plant;
pub mod task;
pub mod trend;
pub mod user;
