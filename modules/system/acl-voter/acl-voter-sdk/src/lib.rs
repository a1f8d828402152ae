#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! ACL Voter SDK
//!
//! - [`AclVoterClient`] - yes/no access decisions for a session
//! - [`AclHolder`], [`AclEntry`], [`AclRecipient`], [`Permission`] - ACL model
//! - [`AclVoterError`] - error types

pub mod api;
pub mod error;
pub mod models;

pub use api::AclVoterClient;
pub use error::AclVoterError;
pub use models::{AclEntry, AclHolder, AclRecipient, Permission};
