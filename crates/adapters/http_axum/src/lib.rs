//! # devdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered dashboard page** at `/`
//! - Serve the bare **link list fragment** at `/nav`
//! - Serve a **JSON listing** of the same links at `/api/links`
//! - Map domain values into HTML (askama templates) or JSON responses
//!
//! Every page is complete HTML with zero JavaScript. The `port` query
//! parameter, where accepted, only changes the port segment of each link.
//!
//! ## Dependency rule
//! Depends on `devdash-domain` only. Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
