/// Comment service - creation under an existing post
use crate::db::{comment_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::CommentResponse;
use sqlx::PgPool;

/// Create a comment on a post.
///
/// The referenced author must exist. Existence of the post itself is the
/// caller's precondition, established by `posts::get_post_or_404` before
/// this service is invoked.
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    text: &str,
) -> Result<CommentResponse> {
    if !user_repo::user_exists(pool, user_id).await? {
        return Err(AppError::UnprocessableEntity(format!(
            "User with id {} not found. Cannot create comment.",
            user_id
        )));
    }

    let comment = comment_repo::create_comment(pool, post_id, user_id, text).await?;
    Ok(comment.into())
}
