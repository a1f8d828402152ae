//! Configuration for the static ACL voter plugin.

use serde::{Deserialize, Serialize};
use surrogate_security::constants::ADMINISTRATOR_AUTHORITY;

/// Plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAclVoterPluginConfig {
    /// Authority that marks an administrator.
    #[serde(deserialize_with = "surrogate_security::scalar::string")]
    pub admin_authority: String,

    /// Whether administrators pass every ACL check.
    pub administrators_bypass_acls: bool,
}

impl Default for StaticAclVoterPluginConfig {
    fn default() -> Self {
        Self {
            admin_authority: ADMINISTRATOR_AUTHORITY.to_owned(),
            administrators_bypass_acls: true,
        }
    }
}
