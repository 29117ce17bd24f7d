/// User repository - handles all database operations for users
use crate::db::{comment_repo, post_repo};
use crate::models::{User, UserDetail};
use sqlx::PgPool;

/// Create a new user in the database
pub async fn create_user(pool: &PgPool, username: &str, email: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email)
        VALUES ($1, $2)
        RETURNING id, username, email
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by email (unique-index lookup, no eager expansion)
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Check whether a user exists, touching only the primary key index
pub async fn user_exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Fetch a user with posts and comments eagerly loaded.
///
/// The output schema requires the full nested graph: each of the user's
/// posts carries its author and its comments (with their authors), and the
/// user's own comments carry their authors.
pub async fn get_user_detail(pool: &PgPool, id: i64) -> Result<Option<UserDetail>, sqlx::Error> {
    let user = match find_by_id(pool, id).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    let post_rows = post_repo::list_by_user(pool, id).await?;
    let post_ids: Vec<i64> = post_rows.iter().map(|p| p.id).collect();
    let post_comments = comment_repo::list_for_posts(pool, &post_ids).await?;
    let posts = post_repo::attach_comments(post_rows, post_comments);

    let comments = comment_repo::list_by_user(pool, id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Some(UserDetail {
        id: user.id,
        username: user.username,
        email: user.email,
        posts,
        comments,
    }))
}
