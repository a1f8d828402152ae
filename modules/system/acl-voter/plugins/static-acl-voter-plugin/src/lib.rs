#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static ACL Voter Plugin
//!
//! Decides purely from the session's authorities and the holder's entries:
//!
//! - administrator: the session holds `admin_authority`
//! - `is_granted`: the session holds exactly the requested authority
//! - `has_access`: administrators pass when `administrators_bypass_acls` is
//!   set; otherwise the union of matching entries must cover the request
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_acl_voter_plugin:
//!     config:
//!       admin_authority: "Administrator"
//!       administrators_bypass_acls: true
//! ```

pub mod config;
pub mod domain;

pub use config::StaticAclVoterPluginConfig;
pub use domain::Service;
