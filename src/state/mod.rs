// State management module
// Handles SQLite persistence and data directory layout

pub mod db;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod repository;
pub mod storage;

pub use db::{init_store, DbError, DbResult, SqliteStore};
pub use models::{Application, ApplicationStatus, InvalidStatus};
pub use repository::ApplicationRepository;
