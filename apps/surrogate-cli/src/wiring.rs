//! Builds the helper and its collaborators from layered configuration.

use std::sync::Arc;

use acl_voter_sdk::AclVoterClient;
use figment::Figment;
use role_lookup_sdk::RoleLookupClient;
use security_helper::{ConfigError, SecurityHelper, SecurityHelperConfig, module_config};
use static_acl_voter_plugin::StaticAclVoterPluginConfig;
use static_role_lookup_plugin::StaticRoleLookupPluginConfig;

pub const SECURITY_HELPER_MODULE: &str = "security_helper";
pub const ROLE_LOOKUP_MODULE: &str = "static_role_lookup_plugin";
pub const ACL_VOTER_MODULE: &str = "static_acl_voter_plugin";

pub struct Services {
    pub helper: SecurityHelper,
    pub roles: Arc<dyn RoleLookupClient>,
    pub voter: Arc<dyn AclVoterClient>,
}

/// # Errors
///
/// Returns [`ConfigError`] when any module section is malformed.
pub fn build(figment: &Figment) -> Result<Services, ConfigError> {
    let helper_cfg: SecurityHelperConfig = module_config(figment, SECURITY_HELPER_MODULE)?;
    let roles_cfg: StaticRoleLookupPluginConfig = module_config(figment, ROLE_LOOKUP_MODULE)?;
    let voter_cfg: StaticAclVoterPluginConfig = module_config(figment, ACL_VOTER_MODULE)?;

    tracing::debug!(
        users = roles_cfg.users.len(),
        system_principal = %helper_cfg.system_principal,
        "wiring static role lookup and acl voter"
    );

    let roles: Arc<dyn RoleLookupClient> =
        Arc::new(static_role_lookup_plugin::Service::from_config(&roles_cfg));
    let voter: Arc<dyn AclVoterClient> =
        Arc::new(static_acl_voter_plugin::Service::from_config(&voter_cfg));

    Ok(Services {
        helper: SecurityHelper::new(Arc::clone(&roles), Arc::clone(&voter), helper_cfg),
        roles,
        voter,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use surrogate_security::Principal;

    use super::*;

    #[tokio::test]
    async fn sample_config_wires_working_services() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/surrogate.yaml");
        let figment = security_helper::load_figment(Some(std::path::Path::new(path))).unwrap();
        let services = build(&figment).unwrap();

        let auth = services.helper.create_authentication("suzy").await.unwrap();
        assert_eq!(auth.authorities().len(), 2);
        assert!(services.roles.all_users().await.unwrap().contains(&Principal::from("tiffany")));
        assert!(services.helper.create_authentication("mallory").await.is_err());
    }

    #[test]
    fn malformed_plugin_section_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"modules:\n  static_acl_voter_plugin:\n    config:\n      admin_authority: [1, 2]\n")
            .unwrap();
        let figment = security_helper::load_figment(Some(file.path())).unwrap();

        assert!(build(&figment).is_err());
    }
}
