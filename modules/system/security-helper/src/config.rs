//! Configuration for the security helper, and module configuration loading.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use surrogate_security::constants::{
    ADMINISTRATOR_AUTHORITY, ANONYMOUS_AUTHORITY, ANONYMOUS_PRINCIPAL, AUTHENTICATED_AUTHORITY,
    SYSTEM_PRINCIPAL,
};
use thiserror::Error;

/// Prefix of environment variables overriding file configuration.
///
/// `SURROGATE__MODULES__SECURITY_HELPER__CONFIG__SYSTEM_PRINCIPAL=root` sets
/// `modules.security_helper.config.system_principal`.
pub const ENV_PREFIX: &str = "SURROGATE__";

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityHelperConfig {
    /// Principal used by `run_as_system`.
    #[serde(deserialize_with = "surrogate_security::scalar::string")]
    pub system_principal: String,

    /// Authorities held by the system principal.
    #[serde(deserialize_with = "surrogate_security::scalar::strings")]
    pub system_authorities: Vec<String>,

    /// Principal used by `run_as_anonymous`.
    #[serde(deserialize_with = "surrogate_security::scalar::string")]
    pub anonymous_principal: String,

    /// Sole authority held by the anonymous principal.
    #[serde(deserialize_with = "surrogate_security::scalar::string")]
    pub anonymous_authority: String,
}

impl Default for SecurityHelperConfig {
    fn default() -> Self {
        Self {
            system_principal: SYSTEM_PRINCIPAL.to_owned(),
            system_authorities: vec![
                ADMINISTRATOR_AUTHORITY.to_owned(),
                AUTHENTICATED_AUTHORITY.to_owned(),
            ],
            anonymous_principal: ANONYMOUS_PRINCIPAL.to_owned(),
            anonymous_authority: ANONYMOUS_AUTHORITY.to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("invalid configuration for module '{module}': {source}")]
    Invalid {
        module: String,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Layer the optional YAML file under `SURROGATE__` environment overrides.
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] when `path` is given but missing.
pub fn load_figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Yaml::file(path));
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

/// Extract `modules.<module>.config`, falling back to `T::default()` when absent.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the section exists but does not
/// deserialize into `T`.
pub fn module_config<T>(figment: &Figment, module: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let key = format!("modules.{module}.config");
    if figment.find_value(&key).is_err() {
        tracing::debug!(module, "no configuration section; using defaults");
        return Ok(T::default());
    }
    figment
        .extract_inner(&key)
        .map_err(|e| ConfigError::Invalid {
            module: module.to_owned(),
            source: Box::new(e),
        })
}
