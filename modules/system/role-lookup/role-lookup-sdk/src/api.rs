//! Public API trait for the role-lookup service.

use async_trait::async_trait;
use surrogate_security::{GrantedAuthority, Principal};

use crate::error::RoleLookupError;

/// Directory of users and the roles granted to them.
///
/// Consulted by the security helper every time it builds an authentication
/// record; implementations decide on their own caching.
#[async_trait]
pub trait RoleLookupClient: Send + Sync {
    /// Roles currently granted to `user`.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the implementation rejects unknown users
    /// - `ServiceUnavailable` if the directory cannot be reached
    /// - `Internal` for unexpected errors
    async fn roles_for_user(
        &self,
        user: &Principal,
    ) -> Result<Vec<GrantedAuthority>, RoleLookupError>;

    /// Users holding `role`.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` / `Internal` as for [`Self::roles_for_user`]
    async fn users_in_role(
        &self,
        role: &GrantedAuthority,
    ) -> Result<Vec<Principal>, RoleLookupError>;

    /// Every role known to the directory.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` / `Internal`
    async fn all_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError>;

    /// Every user known to the directory.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` / `Internal`
    async fn all_users(&self) -> Result<Vec<Principal>, RoleLookupError>;

    /// Roles reserved for the platform itself (administrator and the like).
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` / `Internal`
    async fn system_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError>;
}
