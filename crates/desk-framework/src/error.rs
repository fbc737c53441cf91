//! # Framework Errors
//!
//! This module defines the error types shared across the framework. The
//! split mirrors how errors actually travel through the system:
//!
//! - [`ValidationError`] is local and synchronous: a draft failed to build,
//!   the first failing reason is shown in the status cell, and no network
//!   call happens.
//! - [`TransportError`] comes back from a gateway call and is folded into
//!   the status cell by the view-model actor. A missing entity is a
//!   [`TransportError::Status`] with a 4xx code, not a separate kind.
//! - [`FrameworkError`] is the only error a [`FormHandle`](crate::FormHandle)
//!   can return, and only when the actor itself is gone. Operation failures
//!   never surface as typed errors to the caller; the status cell is the
//!   display-only error channel.

/// Errors that can occur within the view-model plumbing itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// A pre-flight validation failure: the first failing reason, phrased for
/// display ("Name is required").
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// A failed gateway call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The backend answered outside the accepted status range.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never completed (connection refused, timeout, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}
