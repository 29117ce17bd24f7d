//! Route configuration
//!
//! Centralized route setup; each domain manages its own scope.

use crate::handlers;
use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/", web::post().to(handlers::create_user))
            .route("/{user_id}", web::get().to(handlers::get_user)),
    )
    .service(
        web::scope("/posts")
            .route("/", web::post().to(handlers::create_post))
            .route("/", web::get().to(handlers::list_posts))
            .route("/{post_id}", web::get().to(handlers::get_post))
            .route("/{post_id}/comments", web::post().to(handlers::create_comment)),
    );
}

/// JSON extractor configuration: malformed bodies are rejected before any
/// handler logic runs, with the same `detail` shape as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor configuration: a non-numeric id in the URL is malformed
/// input, not a missing resource.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

/// Query extractor configuration: malformed paging parameters get the same
/// `detail` shape as every other boundary rejection.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    unprocessable(err)
}

fn path_error_handler(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    unprocessable(err)
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    unprocessable(err)
}

fn unprocessable<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response =
        HttpResponse::UnprocessableEntity().json(serde_json::json!({ "detail": err.to_string() }));
    InternalError::from_response(err, response).into()
}
