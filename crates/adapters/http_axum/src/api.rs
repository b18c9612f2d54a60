//! JSON API handlers.

pub mod links;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/links", get(links::list))
}
