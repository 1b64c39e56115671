pub mod error;
pub mod models;
pub mod openapi;
pub mod password;
pub mod repo;
pub mod routes;
pub mod service;

// Re-export commonly used items for tests / external users
pub use routes::{config, json_config, AppState};
pub use service::AccountService;
