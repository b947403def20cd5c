pub mod faqs;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /faqs                list (public), create (director / organizer)
/// /faqs/{id}           get (public), update, delete (director / organizer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/faqs", faqs::router())
}
