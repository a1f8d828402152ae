#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Role-lookup SDK
//!
//! - [`RoleLookupClient`] - directory of users and the roles they hold
//! - [`RoleLookupError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! let roles = lookup.roles_for_user(&Principal::from("suzy")).await?;
//! ```

pub mod api;
pub mod error;

pub use api::RoleLookupClient;
pub use error::RoleLookupError;
