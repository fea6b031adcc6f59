/// API route handlers
///
/// - `health`: Health check endpoint
/// - `tasks`: Task list endpoints (`/get_user`, `/settask`, `/deletetask`)

pub mod health;
pub mod tasks;
