//! Public API trait for access-control voters.

use async_trait::async_trait;
use surrogate_security::{GrantedAuthority, SecurityContext};

use crate::error::AclVoterError;
use crate::models::{AclEntry, AclHolder, Permission};

/// Renders access-control decisions for a session.
///
/// ```ignore
/// let voter: Arc<dyn AclVoterClient> = Arc::new(static_acl_voter_plugin::Service::from_config(&cfg));
///
/// if voter.is_granted(&ctx, &GrantedAuthority::from("Power User")).await? {
///     // ...
/// }
/// ```
#[async_trait]
pub trait AclVoterClient: Send + Sync {
    /// Whether the session belongs to a platform administrator.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the policy store cannot be reached
    /// - `Internal` for unexpected errors
    async fn is_administrator(&self, ctx: &SecurityContext) -> Result<bool, AclVoterError>;

    /// Whether `role` is granted to the session.
    ///
    /// # Errors
    ///
    /// As for [`Self::is_administrator`].
    async fn is_granted(
        &self,
        ctx: &SecurityContext,
        role: &GrantedAuthority,
    ) -> Result<bool, AclVoterError>;

    /// Whether the session may perform every operation in `permission` on `holder`.
    ///
    /// # Errors
    ///
    /// As for [`Self::is_administrator`].
    async fn has_access(
        &self,
        ctx: &SecurityContext,
        holder: &dyn AclHolder,
        permission: Permission,
    ) -> Result<bool, AclVoterError>;

    /// Entries of `holder` that apply to the session.
    ///
    /// # Errors
    ///
    /// As for [`Self::is_administrator`].
    async fn effective_acls(
        &self,
        ctx: &SecurityContext,
        holder: &dyn AclHolder,
    ) -> Result<Vec<AclEntry>, AclVoterError>;
}
