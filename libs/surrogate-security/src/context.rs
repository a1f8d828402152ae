use std::collections::HashMap;

use uuid::Uuid;

use crate::authentication::Authentication;
use crate::params::ParameterProvider;
use crate::principal::{GrantedAuthority, Principal};

/// `SecurityContext` is the session an operation runs under.
///
/// Built by the security helper for a principal and either installed into the
/// ambient scope or passed explicitly to authorization queries.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    /// Session identifier, unique per established session.
    session_id: Uuid,
    /// Authentication record bound to this session.
    authentication: Authentication,
    /// Session attributes seeded from the parameter provider at creation.
    #[serde(default)]
    attributes: HashMap<String, serde_json::Value>,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder bound to `authentication`
    #[must_use]
    pub fn builder(authentication: Authentication) -> SecurityContextBuilder {
        SecurityContextBuilder {
            session_id: None,
            authentication,
            attributes: HashMap::new(),
        }
    }

    /// Create an anonymous `SecurityContext` with no attributes
    #[must_use]
    pub fn anonymous() -> Self {
        Self::builder(Authentication::anonymous()).build()
    }

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[must_use]
    pub fn authentication(&self) -> &Authentication {
        &self.authentication
    }

    #[must_use]
    pub fn principal(&self) -> &Principal {
        self.authentication.principal()
    }

    /// Principal name of the bound authentication record.
    #[must_use]
    pub fn name(&self) -> &str {
        self.authentication.name()
    }

    #[must_use]
    pub fn authorities(&self) -> &[GrantedAuthority] {
        self.authentication.authorities()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_authenticated()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }

    #[must_use]
    pub fn attributes(&self) -> &HashMap<String, serde_json::Value> {
        &self.attributes
    }
}

pub struct SecurityContextBuilder {
    session_id: Option<Uuid>,
    authentication: Authentication,
    attributes: HashMap<String, serde_json::Value>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Copy every parameter the provider exposes into the session attributes.
    #[must_use]
    pub fn parameters(mut self, params: &dyn ParameterProvider) -> Self {
        for name in params.parameter_names() {
            if let Some(value) = params.parameter(&name) {
                self.attributes.insert(name, value);
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            session_id: self.session_id.unwrap_or_else(Uuid::new_v4),
            authentication: self.authentication,
            attributes: self.attributes,
        }
    }
}
