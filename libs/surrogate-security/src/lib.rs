#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Identity model and ambient security scope.
//!
//! - [`Principal`], [`GrantedAuthority`] - who is acting and what they hold
//! - [`Authentication`] - a principal bound to its granted authorities
//! - [`SecurityContext`] - the session carrying an authentication record
//! - [`ambient`] - the task-local "current identity" slot

pub mod ambient;
pub mod authentication;
pub mod bin_codec;
pub mod constants;
pub mod context;
pub mod params;
pub mod principal;
pub mod scalar;

pub use ambient::AmbientError;
pub use authentication::{Authentication, AuthenticationBuilder};
pub use context::{SecurityContext, SecurityContextBuilder};
pub use params::{NoParameters, ParameterProvider};
pub use principal::{GrantedAuthority, Principal};

pub use bin_codec::{AUTH_BIN_VERSION, AuthDecodeError, AuthEncodeError, decode_bin, encode_bin};
