use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{ANONYMOUS_AUTHORITY, ANONYMOUS_PRINCIPAL};
use crate::principal::{GrantedAuthority, Principal};

/// A resolved authentication record binding a principal to its granted authorities.
///
/// Built by the security helper from role-lookup results and carried by a
/// [`crate::SecurityContext`]. Credentials are never serialized and are
/// redacted in `Debug` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authentication {
    principal: Principal,
    #[serde(default)]
    authorities: Vec<GrantedAuthority>,
    /// `false` only for anonymous records.
    authenticated: bool,
    #[serde(skip)]
    credentials: Option<SecretString>,
}

impl Authentication {
    /// Create a builder for an authenticated record of `principal`.
    #[must_use]
    pub fn builder(principal: impl Into<Principal>) -> AuthenticationBuilder {
        AuthenticationBuilder {
            principal: principal.into(),
            authorities: Vec::new(),
            authenticated: true,
            credentials: None,
        }
    }

    /// The unauthenticated record holding only the anonymous authority.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::builder(ANONYMOUS_PRINCIPAL)
            .authority(ANONYMOUS_AUTHORITY)
            .unauthenticated()
            .build()
    }

    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Principal name as a plain string.
    #[must_use]
    pub fn name(&self) -> &str {
        self.principal.as_str()
    }

    #[must_use]
    pub fn authorities(&self) -> &[GrantedAuthority] {
        &self.authorities
    }

    #[must_use]
    pub fn has_authority(&self, role: &GrantedAuthority) -> bool {
        self.authorities.contains(role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&SecretString> {
        self.credentials.as_ref()
    }
}

pub struct AuthenticationBuilder {
    principal: Principal,
    authorities: Vec<GrantedAuthority>,
    authenticated: bool,
    credentials: Option<SecretString>,
}

impl AuthenticationBuilder {
    #[must_use]
    pub fn authority(mut self, role: impl Into<GrantedAuthority>) -> Self {
        let role = role.into();
        if !self.authorities.contains(&role) {
            self.authorities.push(role);
        }
        self
    }

    #[must_use]
    pub fn authorities<I, R>(self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<GrantedAuthority>,
    {
        roles.into_iter().fold(self, Self::authority)
    }

    #[must_use]
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    #[must_use]
    pub fn credentials(mut self, secret: impl Into<SecretString>) -> Self {
        self.credentials = Some(secret.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Authentication {
        Authentication {
            principal: self.principal,
            authorities: self.authorities,
            authenticated: self.authenticated,
            credentials: self.credentials,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn builder_collects_distinct_authorities() {
        let auth = Authentication::builder("suzy")
            .authority("Power User")
            .authorities(["Authenticated", "Power User"])
            .build();

        assert_eq!(auth.name(), "suzy");
        assert!(auth.is_authenticated());
        assert_eq!(
            auth.authorities(),
            &[
                GrantedAuthority::new("Power User"),
                GrantedAuthority::new("Authenticated")
            ]
        );
        assert!(auth.has_authority(&GrantedAuthority::new("Authenticated")));
        assert!(!auth.has_authority(&GrantedAuthority::new("Administrator")));
    }

    #[test]
    fn anonymous_record_is_not_authenticated() {
        let auth = Authentication::anonymous();

        assert_eq!(auth.name(), ANONYMOUS_PRINCIPAL);
        assert!(!auth.is_authenticated());
        assert!(auth.has_authority(&GrantedAuthority::new(ANONYMOUS_AUTHORITY)));
    }

    #[test]
    fn credentials_are_redacted_and_never_serialized() {
        let auth = Authentication::builder("joe")
            .credentials("hunter2".to_owned())
            .build();

        assert_eq!(
            auth.credentials().map(ExposeSecret::expose_secret),
            Some("hunter2")
        );
        assert!(!format!("{auth:?}").contains("hunter2"));

        let json = serde_json::to_string(&auth).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("credentials"));

        let back: Authentication = serde_json::from_str(&json).unwrap();
        assert!(back.credentials().is_none());
        assert_eq!(back.name(), "joe");
    }
}
