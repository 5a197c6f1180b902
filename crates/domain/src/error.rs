//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ChoreHubError`] via `#[from]` at the port boundary.

/// Top-level error for all chorehub operations.
#[derive(Debug, thiserror::Error)]
pub enum ChoreHubError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced aggregate does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The message broker transport failed.
    #[error("broker error")]
    Broker(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("chore name must not be empty")]
    EmptyName,

    #[error("chore name must not exceed 255 characters")]
    NameTooLong,

    #[error("chore description must not exceed 1000 characters")]
    DescriptionTooLong,

    #[error("a recurrence pattern is required for {kind} chores")]
    PatternRequired {
        /// Human-readable recurrence kind.
        kind: &'static str,
    },

    #[error("one-time chores must not carry a recurrence pattern")]
    PatternForbidden,

    #[error("user name must not be empty")]
    EmptyUserName,

    #[error("assignee {name:?} does not exist")]
    UnknownAssignee {
        /// Name that failed to resolve to a user.
        name: String,
    },
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Aggregate kind, e.g. `"Chore"`.
    pub entity: &'static str,
    /// Stringified identifier.
    pub id: String,
}
