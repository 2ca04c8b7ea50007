// src/lib.rs

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod gantt;
pub mod kanban;
pub mod projects;
pub mod state;
pub mod tasks;
pub mod workspace;

pub use config::CONFIG;
pub use error::{AppError, Result};
pub use state::AppState;
