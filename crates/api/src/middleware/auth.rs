//! Caller classification for Axum handlers.
//!
//! [`AuthStatus`] is extracted from every request without ever rejecting, so
//! handlers decide when authorization runs relative to body validation.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use faqdesk_core::types::DbId;

use crate::auth::jwt::{verify_token, JwtConfig};
use crate::state::AppState;

/// Authenticated caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"director"`, `"organizer"`).
    pub role: String,
}

/// Outcome of inspecting a request's credentials.
///
/// `NoToken` and `NotLoggedIn` are kept apart: the first answers 400, the
/// second 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// No credential was presented.
    NoToken,
    /// A credential was presented but does not identify a live session.
    NotLoggedIn,
    /// The caller is known.
    Authenticated(AuthUser),
}

/// Classifies the credentials attached to a request.
pub trait Authorizer: Send + Sync + 'static {
    fn classify(&self, headers: &HeaderMap) -> AuthStatus;
}

/// [`Authorizer`] that validates HS256 `Bearer` tokens.
#[derive(Debug, Clone)]
pub struct JwtAuthorizer {
    config: JwtConfig,
}

impl JwtAuthorizer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl Authorizer for JwtAuthorizer {
    fn classify(&self, headers: &HeaderMap) -> AuthStatus {
        let Some(raw) = headers.get(AUTHORIZATION) else {
            return AuthStatus::NoToken;
        };
        let Ok(value) = raw.to_str() else {
            return AuthStatus::NotLoggedIn;
        };
        let value = value.trim();
        if value.is_empty() {
            return AuthStatus::NoToken;
        }

        let Some(token) = value.strip_prefix("Bearer ") else {
            return AuthStatus::NotLoggedIn;
        };

        match verify_token(token.trim(), &self.config) {
            Ok(claims) => AuthStatus::Authenticated(AuthUser {
                user_id: claims.sub,
                role: claims.role,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected access token");
                AuthStatus::NotLoggedIn
            }
        }
    }
}

impl FromRequestParts<AppState> for AuthStatus {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(state.authorizer.classify(&parts.headers))
    }
}
