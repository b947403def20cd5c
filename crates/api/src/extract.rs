//! Request extractors shared by the FAQ handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use faqdesk_core::error::CoreError;
use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::DbId;

use crate::error::AppError;

/// A FAQ body that parsed as JSON and has all five fields well-typed.
///
/// The body is read as raw bytes so `Content-Type` is not required, then
/// checked in two stages:
///
/// 1. not JSON at all → [`AppError::BadRequest`] (400)
/// 2. JSON with a missing or wrongly-typed field →
///    [`CoreError::Validation`] (422)
///
/// A body over the router's size limit is answered with 413 before either.
#[derive(Debug, Clone)]
pub struct FaqPayload(pub FaqInput);

impl<S> FromRequest<S> for FaqPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_read_error)?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

        let input: FaqInput = serde_json::from_value(value)
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(FaqPayload(input))
    }
}

fn body_read_error(rejection: BytesRejection) -> AppError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        _ => AppError::BadRequest(rejection.body_text()),
    }
}

/// The `{id}` path segment of an item route.
///
/// A segment that is not a valid id cannot name an existing record, so it
/// is answered with 404 rather than the framework's default 400.
#[derive(Debug, Clone, Copy)]
pub struct FaqId(pub DbId);

impl<S> FromRequestParts<S> for FaqId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(FaqId(id))
    }
}
