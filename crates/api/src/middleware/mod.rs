//! Authentication and authorization helpers.
//!
//! - [`auth::AuthStatus`] -- Classifies the caller from the `Authorization` header.
//! - [`rbac::require_faq_editor`] -- Requires the `director` or `organizer` role.

pub mod auth;
pub mod rbac;
