use std::sync::Arc;

use faqdesk_db::store::FaqStore;

use crate::config::ServerConfig;
use crate::middleware::auth::Authorizer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store and the
/// authorizer are injected here rather than looked up globally, so tests can
/// swap either one.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Persistence handle for FAQ records.
    pub store: Arc<dyn FaqStore>,
    /// Classifies the caller of each request.
    pub authorizer: Arc<dyn Authorizer>,
}
