#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Role-Lookup Plugin
//!
//! Serves the user/role directory from configuration. Intended for
//! development, tests and single-node installs without an external
//! directory.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_role_lookup_plugin:
//!     config:
//!       users:
//!         - name: suzy
//!           roles: ["Power User"]
//!       extra_roles: ["Authenticated"]
//!       system_roles: ["Administrator"]
//!       unknown_user: empty
//! ```

pub mod config;
pub mod domain;

pub use config::StaticRoleLookupPluginConfig;
pub use domain::Service;
