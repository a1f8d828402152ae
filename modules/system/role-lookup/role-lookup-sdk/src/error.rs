//! Error types for the role-lookup service.

use thiserror::Error;

/// Errors that can occur when querying the role-lookup service.
#[derive(Debug, Error)]
pub enum RoleLookupError {
    /// The directory does not know this user.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// The backing directory is not reachable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
