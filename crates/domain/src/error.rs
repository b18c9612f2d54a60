//! Common error types used across the workspace.

/// Base error for every fallible domain operation.
#[derive(Debug, thiserror::Error)]
pub enum DevDashError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A label or heading was empty.
    #[error("label must not be empty")]
    EmptyLabel,

    /// A link path did not start with `/`.
    #[error("path {0:?} must start with '/'")]
    RelativePath(String),

    /// Port zero was requested.
    #[error("port must be non-zero")]
    ZeroPort,

    /// A port could not be parsed as a decimal number.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}
