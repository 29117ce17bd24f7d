use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::services::{comments, posts};

// ============================================
// Request Structs
// ============================================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_skip() -> i64 {
    posts::DEFAULT_SKIP
}

fn default_limit() -> i64 {
    posts::DEFAULT_LIMIT
}

// ============================================
// Handler Functions
// ============================================

/// Create a post
/// POST /posts/
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = posts::create_post(pool.get_ref(), &req.title, &req.content, req.user_id).await?;

    Ok(HttpResponse::Created().json(post))
}

/// List posts, most recent first
/// GET /posts/?skip=&limit=
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let posts = posts::list_posts(pool.get_ref(), query.skip, query.limit).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post with its comments
/// GET /posts/{post_id}
pub async fn get_post(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let post = posts::get_post_or_404(pool.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Add a comment to a post
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    // Resolve the path target first: a missing post is a 404 regardless of
    // the body's contents.
    let post = posts::get_post_or_404(pool.get_ref(), path.into_inner()).await?;

    let comment = comments::create_comment(pool.get_ref(), post.id, req.user_id, &req.text).await?;

    Ok(HttpResponse::Created().json(comment))
}
