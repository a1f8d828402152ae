//! Configuration for the static role-lookup plugin.

use serde::{Deserialize, Serialize};
use surrogate_security::constants::{ADMINISTRATOR_AUTHORITY, AUTHENTICATED_AUTHORITY};

/// Plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticRoleLookupPluginConfig {
    /// Known users and the roles declared for them.
    pub users: Vec<UserRoles>,

    /// Roles appended to every known user.
    #[serde(deserialize_with = "surrogate_security::scalar::strings")]
    pub extra_roles: Vec<String>,

    /// Roles reserved for the platform.
    #[serde(deserialize_with = "surrogate_security::scalar::strings")]
    pub system_roles: Vec<String>,

    /// What `roles_for_user` does for a name not in `users`.
    pub unknown_user: UnknownUserPolicy,
}

impl Default for StaticRoleLookupPluginConfig {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            extra_roles: vec![AUTHENTICATED_AUTHORITY.to_owned()],
            system_roles: vec![ADMINISTRATOR_AUTHORITY.to_owned()],
            unknown_user: UnknownUserPolicy::Empty,
        }
    }
}

/// A user entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRoles {
    #[serde(deserialize_with = "surrogate_security::scalar::string")]
    pub name: String,
    #[serde(default, deserialize_with = "surrogate_security::scalar::strings")]
    pub roles: Vec<String>,
}

/// Handling of users missing from the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownUserPolicy {
    /// Report no roles.
    #[default]
    Empty,
    /// Fail with `UserNotFound`.
    Reject,
}
