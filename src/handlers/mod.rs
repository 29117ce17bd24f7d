/// HTTP request handlers
///
/// Handlers bind verb+path patterns to service calls and translate domain
/// outcomes into status codes via `AppError`'s `ResponseError` impl.
pub mod posts;
pub mod users;

pub use posts::*;
pub use users::*;
