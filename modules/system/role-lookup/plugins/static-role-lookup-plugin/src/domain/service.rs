//! Service implementation for the static role-lookup plugin.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use role_lookup_sdk::RoleLookupError;
use surrogate_security::{GrantedAuthority, Principal};

use crate::config::{StaticRoleLookupPluginConfig, UnknownUserPolicy};

/// Static role-lookup service.
///
/// The directory is seeded from configuration and may be edited at runtime
/// with [`Service::grant`] and [`Service::revoke`]; every lookup reads the
/// live directory.
pub struct Service {
    directory: RwLock<BTreeMap<Principal, Vec<GrantedAuthority>>>,
    extra_roles: Vec<GrantedAuthority>,
    system_roles: Vec<GrantedAuthority>,
    unknown_user: UnknownUserPolicy,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticRoleLookupPluginConfig) -> Self {
        let mut directory: BTreeMap<Principal, Vec<GrantedAuthority>> = BTreeMap::new();
        for user in &cfg.users {
            let roles = directory.entry(Principal::from(user.name.as_str())).or_default();
            for role in &user.roles {
                push_unique(roles, GrantedAuthority::from(role.as_str()));
            }
        }

        Self {
            directory: RwLock::new(directory),
            extra_roles: to_authorities(&cfg.extra_roles),
            system_roles: to_authorities(&cfg.system_roles),
            unknown_user: cfg.unknown_user,
        }
    }

    /// Roles of `user`: declared roles first, then the configured extra roles.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for unknown users under the `reject` policy.
    pub fn roles_for_user(&self, user: &Principal) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        let directory = self.directory.read();
        let Some(declared) = directory.get(user) else {
            return match self.unknown_user {
                UnknownUserPolicy::Empty => Ok(Vec::new()),
                UnknownUserPolicy::Reject => Err(RoleLookupError::UserNotFound(user.to_string())),
            };
        };

        let mut roles = declared.clone();
        for extra in &self.extra_roles {
            push_unique(&mut roles, extra.clone());
        }
        Ok(roles)
    }

    #[must_use]
    pub fn users_in_role(&self, role: &GrantedAuthority) -> Vec<Principal> {
        let directory = self.directory.read();
        if self.extra_roles.contains(role) {
            return directory.keys().cloned().collect();
        }
        directory
            .iter()
            .filter(|(_, roles)| roles.contains(role))
            .map(|(user, _)| user.clone())
            .collect()
    }

    /// Declared, extra and system roles, sorted and deduplicated.
    #[must_use]
    pub fn all_roles(&self) -> Vec<GrantedAuthority> {
        let directory = self.directory.read();
        let mut roles: Vec<GrantedAuthority> = directory
            .values()
            .flatten()
            .chain(&self.extra_roles)
            .chain(&self.system_roles)
            .cloned()
            .collect();
        roles.sort();
        roles.dedup();
        roles
    }

    #[must_use]
    pub fn all_users(&self) -> Vec<Principal> {
        self.directory.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn system_roles(&self) -> Vec<GrantedAuthority> {
        self.system_roles.clone()
    }

    /// Grant `role` to `user`, adding the user if unknown.
    pub fn grant(&self, user: &Principal, role: GrantedAuthority) {
        tracing::debug!(user = %user, role = %role, "granting role");
        let mut directory = self.directory.write();
        push_unique(directory.entry(user.clone()).or_default(), role);
    }

    /// Revoke `role` from `user`. Returns whether the user held it.
    pub fn revoke(&self, user: &Principal, role: &GrantedAuthority) -> bool {
        tracing::debug!(user = %user, role = %role, "revoking role");
        let mut directory = self.directory.write();
        directory.get_mut(user).is_some_and(|roles| {
            let before = roles.len();
            roles.retain(|r| r != role);
            roles.len() != before
        })
    }
}

fn push_unique(roles: &mut Vec<GrantedAuthority>, role: GrantedAuthority) {
    if !roles.contains(&role) {
        roles.push(role);
    }
}

fn to_authorities(names: &[String]) -> Vec<GrantedAuthority> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        push_unique(&mut out, GrantedAuthority::from(name.as_str()));
    }
    out
}
