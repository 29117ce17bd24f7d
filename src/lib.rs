/// Blog Service Library
///
/// A REST backend for a small blog domain: users, posts, and comments,
/// persisted in PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Entity rows and response projections
/// - `services`: Business-rule layer (existence and uniqueness checks)
/// - `db`: Database access layer and repositories
/// - `routes`: Route configuration
/// - `validators`: Boundary input validation
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
