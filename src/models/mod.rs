/// Data models for blog-service
///
/// Row types mirror the store schema one-to-one. Relations are
/// one-directional foreign keys at the storage layer; the nested views the
/// API exposes (a user's posts, a post's comments) are reconstructed by
/// query and carried in the response projections below, never as a cyclic
/// object graph in memory.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub post_id: i64,
}

// ============================================
// Join rows for eager-loaded reads
// ============================================

/// A post row joined with its author's columns.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub author_email: String,
}

/// A comment row joined with its author's columns.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub post_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub author_email: String,
}

// ============================================
// Response projections
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author: UserResponse,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(row: CommentWithAuthor) -> Self {
        Self {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
            author: UserResponse {
                id: row.author_id,
                username: row.author_username,
                email: row.author_email,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: UserResponse,
    pub comments: Vec<CommentResponse>,
}

/// A user with posts and comments eagerly loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub posts: Vec<PostResponse>,
    pub comments: Vec<CommentResponse>,
}
