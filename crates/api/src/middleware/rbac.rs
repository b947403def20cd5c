//! Role-based access control.
//!
//! FAQ writes run authorization after the request body has been validated,
//! so the check is a plain function over [`AuthStatus`] rather than a
//! rejecting extractor.

use faqdesk_core::error::CoreError;
use faqdesk_core::roles::can_manage_faqs;

use super::auth::{AuthStatus, AuthUser};
use crate::error::{AppError, AppResult};

/// Require a caller holding one of the FAQ editor roles.
///
/// - no credential → 400
/// - invalid credential → 401
/// - any role other than `director` / `organizer` → 403
pub fn require_faq_editor(status: AuthStatus) -> AppResult<AuthUser> {
    match status {
        AuthStatus::NoToken => Err(AppError::BadRequest(
            "Missing authorization token".into(),
        )),
        AuthStatus::NotLoggedIn => Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired token".into(),
        ))),
        AuthStatus::Authenticated(user) if can_manage_faqs(&user.role) => Ok(user),
        AuthStatus::Authenticated(user) => Err(AppError::Core(CoreError::Forbidden(format!(
            "Role '{}' may not modify FAQs",
            user.role
        )))),
    }
}
