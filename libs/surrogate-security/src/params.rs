//! Parameter sources used when establishing a session.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Opaque name/value source handed to session establishment.
///
/// Values are copied into the new session's attributes; the provider is not
/// retained.
pub trait ParameterProvider: Send + Sync {
    /// Value of the named parameter, if present.
    fn parameter(&self, name: &str) -> Option<Value>;

    /// Names of every parameter this provider exposes.
    fn parameter_names(&self) -> Vec<String>;
}

impl ParameterProvider for HashMap<String, Value> {
    fn parameter(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl ParameterProvider for BTreeMap<String, Value> {
    fn parameter(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

/// A provider with no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParameters;

impl ParameterProvider for NoParameters {
    fn parameter(&self, _name: &str) -> Option<Value> {
        None
    }

    fn parameter_names(&self) -> Vec<String> {
        Vec::new()
    }
}
