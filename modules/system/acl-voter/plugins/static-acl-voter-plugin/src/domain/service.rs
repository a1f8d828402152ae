//! Service implementation for the static ACL voter plugin.

use acl_voter_sdk::{AclEntry, AclHolder, Permission};
use surrogate_security::{GrantedAuthority, SecurityContext};

use crate::config::StaticAclVoterPluginConfig;

/// Static ACL voter service.
pub struct Service {
    admin_authority: GrantedAuthority,
    administrators_bypass_acls: bool,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: &StaticAclVoterPluginConfig) -> Self {
        Self {
            admin_authority: GrantedAuthority::from(cfg.admin_authority.as_str()),
            administrators_bypass_acls: cfg.administrators_bypass_acls,
        }
    }

    #[must_use]
    pub fn is_administrator(&self, ctx: &SecurityContext) -> bool {
        ctx.authorities().contains(&self.admin_authority)
    }

    #[must_use]
    #[allow(clippy::unused_self)] // keeps the voter surface uniform
    pub fn is_granted(&self, ctx: &SecurityContext, role: &GrantedAuthority) -> bool {
        ctx.authorities().contains(role)
    }

    /// Entries naming the session's principal or one of its authorities.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn effective_acls(&self, ctx: &SecurityContext, holder: &dyn AclHolder) -> Vec<AclEntry> {
        holder
            .access_control_list()
            .iter()
            .filter(|entry| entry.recipient.matches(ctx))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn has_access(
        &self,
        ctx: &SecurityContext,
        holder: &dyn AclHolder,
        permission: Permission,
    ) -> bool {
        if self.administrators_bypass_acls && self.is_administrator(ctx) {
            tracing::trace!(principal = %ctx.principal(), "administrator bypasses ACL");
            return true;
        }

        let entries = self.effective_acls(ctx, holder);
        if entries.is_empty() {
            return false;
        }

        let mut granted = Permission::NOTHING;
        for entry in &entries {
            granted |= entry.permission;
        }
        granted.contains(permission)
    }
}
