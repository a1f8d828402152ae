//! Client implementation for the static ACL voter plugin.

use acl_voter_sdk::{AclEntry, AclHolder, AclVoterClient, AclVoterError, Permission};
use async_trait::async_trait;
use surrogate_security::{GrantedAuthority, SecurityContext};

use super::service::Service;

#[async_trait]
impl AclVoterClient for Service {
    async fn is_administrator(&self, ctx: &SecurityContext) -> Result<bool, AclVoterError> {
        Ok(Service::is_administrator(self, ctx))
    }

    async fn is_granted(
        &self,
        ctx: &SecurityContext,
        role: &GrantedAuthority,
    ) -> Result<bool, AclVoterError> {
        Ok(Service::is_granted(self, ctx, role))
    }

    async fn has_access(
        &self,
        ctx: &SecurityContext,
        holder: &dyn AclHolder,
        permission: Permission,
    ) -> Result<bool, AclVoterError> {
        Ok(Service::has_access(self, ctx, holder, permission))
    }

    async fn effective_acls(
        &self,
        ctx: &SecurityContext,
        holder: &dyn AclHolder,
    ) -> Result<Vec<AclEntry>, AclVoterError> {
        Ok(Service::effective_acls(self, ctx, holder))
    }
}
