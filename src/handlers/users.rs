use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::UserResponse;
use crate::services::users;
use crate::validators;

// ============================================
// Request Structs
// ============================================

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

// ============================================
// Handler Functions
// ============================================

/// Create a user
/// POST /users/
pub async fn create_user(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    if !validators::validate_email(&req.email) {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            req.email
        )));
    }

    let user = users::register_user(pool.get_ref(), &req.username, &req.email).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Get a user with nested posts and comments
/// GET /users/{user_id}
pub async fn get_user(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let user = users::get_user(pool.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
