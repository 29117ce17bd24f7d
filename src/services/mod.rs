/// Business-rule layer
///
/// Rules that must hold before a mutation is attempted (existence,
/// uniqueness) are checked here, so client mistakes surface as structured
/// client errors instead of store-level constraint failures.
pub mod comments;
pub mod posts;
pub mod users;
