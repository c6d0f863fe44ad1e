//! Error kinds surfaced by the public API.

use thiserror::Error;

/// Errors raised by the net model and the analyzer.
///
/// Read-only queries never raise: absent names yield empty sets or zero
/// counts rather than an error (see [`crate::net::Net`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ill-formed identifier, duplicate name on creation, reference to a
    /// nonexistent entity, an arc endpoint of the wrong kind, or firing of
    /// a non-ready named transition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation that is only valid on macro-typed transitions was
    /// invoked on a non-macro transition.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A macro event's masked-event list names a transition that does not
    /// (or no longer) exist.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The coverability search exceeded its configured node budget.
    #[error("search limit of {limit} nodes exceeded")]
    SearchLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
