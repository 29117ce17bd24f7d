/// Post repository - handles all database operations for posts
///
/// Reads are hydrated: the author is joined into the post query and
/// comments (with their authors) are batch-loaded and attached, so the
/// response schema is satisfiable without further round-trips.
use crate::db::comment_repo;
use crate::models::{CommentWithAuthor, PostResponse, PostWithAuthor, UserResponse};
use sqlx::PgPool;
use std::collections::HashMap;

/// Create a new post and return it fully hydrated.
///
/// The insert populates scalar columns and the foreign key only; the
/// author graph is re-fetched afterwards.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    user_id: i64,
) -> Result<PostResponse, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO posts (title, content, user_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    match get_post_detail(pool, id).await? {
        Some(post) => Ok(post),
        None => Err(sqlx::Error::RowNotFound),
    }
}

/// Fetch a single post with author and comments (with authors) loaded.
pub async fn get_post_detail(pool: &PgPool, id: i64) -> Result<Option<PostResponse>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.title, p.content, p.created_at,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let post = match row {
        Some(post) => post,
        None => return Ok(None),
    };

    let comments = comment_repo::list_for_posts(pool, &[post.id]).await?;
    Ok(attach_comments(vec![post], comments).pop())
}

/// List posts ordered by creation time descending (most recent first),
/// with offset and count bound, each hydrated with author and comments.
pub async fn list_posts(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<PostResponse>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.title, p.content, p.created_at,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM posts p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    let post_ids: Vec<i64> = rows.iter().map(|p| p.id).collect();
    let comments = comment_repo::list_for_posts(pool, &post_ids).await?;

    Ok(attach_comments(rows, comments))
}

/// List a user's posts with authors joined, newest first.
pub async fn list_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.title, p.content, p.created_at,
               u.id AS author_id, u.username AS author_username, u.email AS author_email
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.user_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Group batch-loaded comments under their posts, preserving post order.
pub fn attach_comments(
    posts: Vec<PostWithAuthor>,
    comments: Vec<CommentWithAuthor>,
) -> Vec<PostResponse> {
    let mut by_post: HashMap<i64, Vec<_>> = HashMap::new();
    for comment in comments {
        by_post
            .entry(comment.post_id)
            .or_default()
            .push(comment.into());
    }

    posts
        .into_iter()
        .map(|post| PostResponse {
            comments: by_post.remove(&post.id).unwrap_or_default(),
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            author: UserResponse {
                id: post.author_id,
                username: post.author_username,
                email: post.author_email,
            },
        })
        .collect()
}
