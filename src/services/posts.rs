/// Post service - creation, listing, and get-or-404 resolution
use crate::db::{post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::PostResponse;
use sqlx::PgPool;

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;

/// Create a post. The referenced author must exist; a dangling `user_id`
/// in the payload is the client's mistake, not a storage failure.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    user_id: i64,
) -> Result<PostResponse> {
    if !user_repo::user_exists(pool, user_id).await? {
        return Err(AppError::UnprocessableEntity(format!(
            "User with id {} not found. Cannot create post.",
            user_id
        )));
    }

    Ok(post_repo::create_post(pool, title, content, user_id).await?)
}

/// List posts, most recent first. Negative paging values are clamped to
/// zero instead of reaching the store, which rejects a negative LIMIT.
pub async fn list_posts(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<PostResponse>> {
    Ok(post_repo::list_posts(pool, skip.max(0), limit.max(0)).await?)
}

/// Resolve a post by id or fail with a not-found signal.
///
/// Called at the top of every handler that takes `/posts/{id}`, so the
/// read path and the comment-creation path share one 404.
pub async fn get_post_or_404(pool: &PgPool, id: i64) -> Result<PostResponse> {
    post_repo::get_post_detail(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
}
