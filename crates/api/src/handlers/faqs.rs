//! Handlers for FAQ records.
//!
//! Reads are public. Writes require the `director` or `organizer` role and
//! validate the body before checking the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use faqdesk_core::error::CoreError;
use faqdesk_core::types::DbId;
use faqdesk_db::models::faq::Faq;

use crate::error::{AppError, AppResult};
use crate::extract::{FaqId, FaqPayload};
use crate::middleware::auth::AuthStatus;
use crate::middleware::rbac::require_faq_editor;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Faq", id })
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// GET /api/v1/faqs
///
/// List every FAQ, ordered by id. An empty table yields `[]`.
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faqs = state.store.list().await?;
    Ok(Json(faqs))
}

/// POST /api/v1/faqs
///
/// Create a FAQ owned by the caller. Rejects a question/answer pair that
/// already exists with 409 and leaves the table untouched.
pub async fn create_faq(
    State(state): State<AppState>,
    auth: AuthStatus,
    FaqPayload(input): FaqPayload,
) -> AppResult<impl IntoResponse> {
    let user = require_faq_editor(auth)?;

    if state
        .store
        .exists_with_content(&input.question, &input.answer)
        .await?
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A FAQ with the same question and answer already exists".into(),
        )));
    }

    let faq = state.store.create(&input, user.user_id).await?;

    tracing::info!(
        faq_id = faq.id,
        user_id = user.user_id,
        placement = %faq.placement,
        "FAQ created",
    );

    Ok((StatusCode::CREATED, Json(faq)))
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// GET /api/v1/faqs/{id}
pub async fn get_faq(
    State(state): State<AppState>,
    FaqId(faq_id): FaqId,
) -> AppResult<Json<Faq>> {
    let faq = state
        .store
        .find_by_id(faq_id)
        .await?
        .ok_or_else(|| not_found(faq_id))?;

    Ok(Json(faq))
}

/// PUT /api/v1/faqs/{id}
///
/// Overwrite all five mutable fields and reassign the FAQ to the caller.
/// Content uniqueness is a create-time rule, so an update may leave two
/// records with the same question and answer.
pub async fn update_faq(
    State(state): State<AppState>,
    FaqId(faq_id): FaqId,
    auth: AuthStatus,
    FaqPayload(input): FaqPayload,
) -> AppResult<Json<Faq>> {
    let user = require_faq_editor(auth)?;

    let faq = state
        .store
        .update(faq_id, &input, user.user_id)
        .await?
        .ok_or_else(|| not_found(faq_id))?;

    tracing::info!(faq_id, user_id = user.user_id, "FAQ updated");

    Ok(Json(faq))
}

/// DELETE /api/v1/faqs/{id}
///
/// Returns 204 with an empty body.
pub async fn delete_faq(
    State(state): State<AppState>,
    FaqId(faq_id): FaqId,
    auth: AuthStatus,
) -> AppResult<StatusCode> {
    let user = require_faq_editor(auth)?;

    if state.store.find_by_id(faq_id).await?.is_none() {
        return Err(not_found(faq_id));
    }

    // A concurrent delete may win between the lookup and here.
    if !state.store.delete(faq_id).await? {
        return Err(not_found(faq_id));
    }

    tracing::info!(faq_id, user_id = user.user_id, "FAQ deleted");

    Ok(StatusCode::NO_CONTENT)
}
