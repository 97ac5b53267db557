use thiserror::Error;

/// Failures of inbox operations, caught at the operation boundary and
/// converted into one of the two user-visible channels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InboxError {
    #[error("Authentication token not found")]
    MissingToken,
    /// Only the "New" listing routes by role; an absent role fails
    /// closed instead of silently picking an endpoint.
    #[error("User role not found")]
    MissingRole,
    /// Non-2xx from a listing endpoint, carrying the user-facing text
    /// (the body's `detail` when present, else a per-category fallback).
    #[error("{0}")]
    Fetch(String),
    /// Network failure or an unparseable success body.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx from a mutating endpoint; no usable message in the body.
    #[error("request failed with status {0}")]
    Status(u16),
}
