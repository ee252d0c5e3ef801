//! # REST API Module
//!
//! Thin HTTP glue over the storage service: axum routes for student and
//! course CRUD, enrollment management, filtering, and pagination, plus the
//! status-code mapping for storage outcomes.

pub mod config;
pub mod courses;
pub mod errors;
pub mod query;
pub mod response;
pub mod server;
pub mod students;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use query::Pagination;
pub use server::{ApiServer, AppState};
