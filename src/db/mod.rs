pub mod connection;
pub mod migrations;
pub mod storage_repo;
pub mod task_store;

pub use connection::*;
pub use task_store::{Subscription, TaskStore};
