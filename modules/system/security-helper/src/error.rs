//! Errors raised by the security helper itself.
//!
//! Failures of the work run under a substituted identity are never wrapped
//! in these; they reach the caller unchanged.

use role_lookup_sdk::RoleLookupError;
use surrogate_security::AmbientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecurityHelperError {
    /// Roles for the principal could not be resolved.
    #[error("role lookup failed for '{principal}': {source}")]
    RoleLookup {
        principal: String,
        #[source]
        source: RoleLookupError,
    },

    /// The ambient identity could not be replaced.
    #[error(transparent)]
    Ambient(#[from] AmbientError),
}
