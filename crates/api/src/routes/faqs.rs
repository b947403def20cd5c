//! Route definitions for FAQ records.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// FAQ routes mounted at `/faqs`.
///
/// ```text
/// GET    /        -> list_faqs
/// POST   /        -> create_faq
/// GET    /{id}    -> get_faq
/// PUT    /{id}    -> update_faq
/// DELETE /{id}    -> delete_faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faqs::list_faqs).post(faqs::create_faq))
        .route(
            "/{id}",
            get(faqs::get_faq)
                .put(faqs::update_faq)
                .delete(faqs::delete_faq),
        )
}
