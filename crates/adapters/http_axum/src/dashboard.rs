//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;
pub mod nav;

use axum::Router;
use axum::routing::get;
use devdash_domain::port::Port;
use serde::Deserialize;

use crate::state::AppState;

/// Query string accepted by pages that take a port.
///
/// A missing `port` falls back to [`Port::HTTP`]; anything that is not a
/// decimal in `1..=65535` is rejected by the extractor with `400`.
#[derive(Debug, Default, Deserialize)]
pub struct PortQuery {
    #[serde(default)]
    pub port: Port,
}

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/nav", get(nav::fragment))
}
