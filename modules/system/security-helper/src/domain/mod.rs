//! Domain layer for the security helper.

pub mod service;

pub use service::SecurityHelper;
