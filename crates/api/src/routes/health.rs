//! Liveness endpoint, mounted at the root rather than under `/api/v1`.
//!
//! Always answers 200 so load balancers keep routing reads; an unreachable
//! store shows up as `"degraded"` in the body.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    /// Whether the FAQ store answered its health probe.
    pub store_reachable: bool,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let store_reachable = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "FAQ store failed its health check");
            false
        }
    };

    Json(HealthReport {
        status: if store_reachable {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        store_reachable,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
