//! Error types for ACL voters.

use thiserror::Error;

/// Errors a voter may raise while deciding.
///
/// A denial is a `false` decision, never an error.
#[derive(Debug, Error)]
pub enum AclVoterError {
    /// The voter's backing policy store is not reachable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
