//! # devdash-domain
//!
//! Pure domain model for the local development dashboard.
//!
//! ## Responsibilities
//! - Define **Links** (a tool path paired with a display label)
//! - Define the fixed, ordered **link list** of development tools
//! - Define **Ports** and resolve links into absolute `href`s
//! - Define **Sections** and the **Dashboard** page layout
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Rendering to HTML lives in the HTTP adapter.

pub mod error;
pub mod port;

pub mod dashboard;
pub mod link;
pub mod section;
