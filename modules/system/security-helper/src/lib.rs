#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Security Helper
//!
//! Impersonation and authentication context manager:
//!
//! - [`SecurityHelper`] - run work as another user, as the anonymous user, or
//!   as the system; build authentication records; answer authorization queries
//! - [`SecurityHelperConfig`] - identities used for system and anonymous work
//! - [`SecurityHelperError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! let helper = SecurityHelper::new(roles, voter, SecurityHelperConfig::default());
//!
//! let report = helper
//!     .run_as_user("suzy", || async { render_report().await })
//!     .await?;
//! // the caller's identity is back in place here, whatever `render_report` did
//! ```

pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, SecurityHelperConfig, load_figment, module_config};
pub use domain::SecurityHelper;
pub use error::SecurityHelperError;
