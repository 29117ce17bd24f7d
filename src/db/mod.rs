/// Database access layer
///
/// Repositories translate domain operations into store queries, with
/// explicit control over which related rows are fetched alongside the
/// primary entity. All mutations commit before returning; returned values
/// reflect post-commit state.
use crate::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub mod comment_repo;
pub mod post_repo;
pub mod user_repo;

/// Create the shared connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.url)
        .await
}
