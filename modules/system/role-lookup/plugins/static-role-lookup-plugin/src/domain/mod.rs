//! Domain layer for the static role-lookup plugin.

mod client;
pub mod service;

pub use service::Service;
