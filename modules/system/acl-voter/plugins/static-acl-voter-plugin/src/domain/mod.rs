//! Domain layer for the static ACL voter plugin.

mod client;
pub mod service;

pub use service::Service;
