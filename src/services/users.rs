/// User service - registration and detail reads
use crate::db::user_repo;
use crate::error::{unique_violation_constraint, AppError, Result};
use crate::models::{User, UserDetail};
use sqlx::PgPool;

/// Register a new user.
///
/// The email must be unused; a duplicate is rejected before any write is
/// attempted. Two concurrent signups can both pass the pre-check, in which
/// case the unique index settles the race and the loser still gets a
/// conflict, not a server error.
pub async fn register_user(pool: &PgPool, username: &str, email: &str) -> Result<User> {
    if user_repo::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Email '{}' is already registered.",
            email
        )));
    }

    match user_repo::create_user(pool, username, email).await {
        Ok(user) => Ok(user),
        Err(err) => match unique_violation_constraint(&err).as_deref() {
            Some("users_email_key") => Err(AppError::Conflict(format!(
                "Email '{}' is already registered.",
                email
            ))),
            Some("users_username_key") => Err(AppError::Conflict(format!(
                "Username '{}' is already taken.",
                username
            ))),
            _ => Err(err.into()),
        },
    }
}

/// Fetch a user with posts and comments, or a not-found signal
pub async fn get_user(pool: &PgPool, id: i64) -> Result<UserDetail> {
    user_repo::get_user_detail(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
}
