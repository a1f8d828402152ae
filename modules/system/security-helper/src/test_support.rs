#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use acl_voter_sdk::{AclEntry, AclHolder, AclVoterClient, AclVoterError, Permission};
use async_trait::async_trait;
use parking_lot::Mutex;
use role_lookup_sdk::{RoleLookupClient, RoleLookupError};
use static_acl_voter_plugin::StaticAclVoterPluginConfig;
use static_role_lookup_plugin::StaticRoleLookupPluginConfig;
use static_role_lookup_plugin::config::UserRoles;
use surrogate_security::{GrantedAuthority, Principal, SecurityContext, ambient};

use crate::config::SecurityHelperConfig;
use crate::domain::SecurityHelper;

/// Name of the ambient principal, if any.
#[must_use]
pub fn current_name() -> Option<String> {
    ambient::current().map(|ctx| ctx.name().to_owned())
}

fn user(name: &str, roles: &[&str]) -> UserRoles {
    UserRoles {
        name: name.to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

/// Helper over the static plugins with a small sample directory.
#[must_use]
pub fn build_helper() -> SecurityHelper {
    let roles = StaticRoleLookupPluginConfig {
        users: vec![
            user("admin", &["Administrator"]),
            user("joe", &["Administrator"]),
            user("suzy", &["Power User"]),
            user("pat", &["Business Analyst"]),
        ],
        ..StaticRoleLookupPluginConfig::default()
    };
    build_helper_with(
        Arc::new(static_role_lookup_plugin::Service::from_config(&roles)),
        Arc::new(static_acl_voter_plugin::Service::from_config(
            &StaticAclVoterPluginConfig::default(),
        )),
    )
}

#[must_use]
pub fn build_helper_with(
    roles: Arc<dyn RoleLookupClient>,
    voter: Arc<dyn AclVoterClient>,
) -> SecurityHelper {
    SecurityHelper::new(roles, voter, SecurityHelperConfig::default())
}

/// Role lookup returning a replaceable role list and counting calls.
pub struct CountingRoleLookup {
    roles: Mutex<Vec<GrantedAuthority>>,
    calls: AtomicUsize,
}

impl CountingRoleLookup {
    #[must_use]
    pub fn new(roles: &[&str]) -> Self {
        Self {
            roles: Mutex::new(roles.iter().map(|r| GrantedAuthority::new(*r)).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_roles(&self, roles: &[&str]) {
        *self.roles.lock() = roles.iter().map(|r| GrantedAuthority::new(*r)).collect();
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleLookupClient for CountingRoleLookup {
    async fn roles_for_user(
        &self,
        _user: &Principal,
    ) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.roles.lock().clone())
    }

    async fn users_in_role(
        &self,
        _role: &GrantedAuthority,
    ) -> Result<Vec<Principal>, RoleLookupError> {
        Ok(Vec::new())
    }

    async fn all_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Ok(self.roles.lock().clone())
    }

    async fn all_users(&self) -> Result<Vec<Principal>, RoleLookupError> {
        Ok(Vec::new())
    }

    async fn system_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Ok(Vec::new())
    }
}

/// Role lookup whose directory is always unreachable.
pub struct FailingRoleLookup;

#[async_trait]
impl RoleLookupClient for FailingRoleLookup {
    async fn roles_for_user(
        &self,
        _user: &Principal,
    ) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Err(RoleLookupError::ServiceUnavailable("directory down".to_owned()))
    }

    async fn users_in_role(
        &self,
        _role: &GrantedAuthority,
    ) -> Result<Vec<Principal>, RoleLookupError> {
        Err(RoleLookupError::ServiceUnavailable("directory down".to_owned()))
    }

    async fn all_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Err(RoleLookupError::ServiceUnavailable("directory down".to_owned()))
    }

    async fn all_users(&self) -> Result<Vec<Principal>, RoleLookupError> {
        Err(RoleLookupError::ServiceUnavailable("directory down".to_owned()))
    }

    async fn system_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Err(RoleLookupError::ServiceUnavailable("directory down".to_owned()))
    }
}

/// Voter that errors on every decision.
pub struct FailingVoter;

#[async_trait]
impl AclVoterClient for FailingVoter {
    async fn is_administrator(&self, _ctx: &SecurityContext) -> Result<bool, AclVoterError> {
        Err(AclVoterError::Internal("policy store corrupted".to_owned()))
    }

    async fn is_granted(
        &self,
        _ctx: &SecurityContext,
        _role: &GrantedAuthority,
    ) -> Result<bool, AclVoterError> {
        Err(AclVoterError::Internal("policy store corrupted".to_owned()))
    }

    async fn has_access(
        &self,
        _ctx: &SecurityContext,
        _holder: &dyn AclHolder,
        _permission: Permission,
    ) -> Result<bool, AclVoterError> {
        Err(AclVoterError::ServiceUnavailable("policy store offline".to_owned()))
    }

    async fn effective_acls(
        &self,
        _ctx: &SecurityContext,
        _holder: &dyn AclHolder,
    ) -> Result<Vec<AclEntry>, AclVoterError> {
        Err(AclVoterError::ServiceUnavailable("policy store offline".to_owned()))
    }
}
