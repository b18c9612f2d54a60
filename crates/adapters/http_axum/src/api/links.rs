//! `/api/links` — the tool links as JSON.

use axum::Json;
use axum::extract::{Query, State};

use devdash_domain::link::ResolvedLink;

use crate::dashboard::PortQuery;
use crate::state::AppState;

/// `GET /api/links?port=N` — every link resolved against `port`, in order.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PortQuery>,
) -> Json<Vec<ResolvedLink>> {
    tracing::debug!(port = %query.port, "listing links");
    Json(state.dashboard.links.resolve(query.port))
}
