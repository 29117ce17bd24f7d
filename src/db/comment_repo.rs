/// Comment repository - handles all database operations for comments
use crate::models::CommentWithAuthor;
use sqlx::PgPool;

/// Create a new comment bound to a post, returned with its author loaded.
///
/// The insert populates scalar columns and foreign keys only; the author
/// join is re-fetched afterwards so the response schema needs no further
/// queries.
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    text: &str,
) -> Result<CommentWithAuthor, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO comments (text, user_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(text)
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    match find_with_author(pool, id).await? {
        Some(comment) => Ok(comment),
        None => Err(sqlx::Error::RowNotFound),
    }
}

/// Find a comment by ID with its author joined
pub async fn find_with_author(
    pool: &PgPool,
    id: i64,
) -> Result<Option<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.text, c.created_at, c.post_id,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Batch-load the comments (with authors) for a set of posts, oldest first
pub async fn list_for_posts(
    pool: &PgPool,
    post_ids: &[i64],
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.text, c.created_at, c.post_id,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.post_id = ANY($1)
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}

/// List the comments a user has written (with authors), oldest first
pub async fn list_by_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.text, c.created_at, c.post_id,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.user_id = $1
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
