//! Client implementation for the static role-lookup plugin.

use async_trait::async_trait;
use role_lookup_sdk::{RoleLookupClient, RoleLookupError};
use surrogate_security::{GrantedAuthority, Principal};

use super::service::Service;

#[async_trait]
impl RoleLookupClient for Service {
    async fn roles_for_user(
        &self,
        user: &Principal,
    ) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Service::roles_for_user(self, user)
    }

    async fn users_in_role(
        &self,
        role: &GrantedAuthority,
    ) -> Result<Vec<Principal>, RoleLookupError> {
        Ok(Service::users_in_role(self, role))
    }

    async fn all_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Ok(Service::all_roles(self))
    }

    async fn all_users(&self) -> Result<Vec<Principal>, RoleLookupError> {
        Ok(Service::all_users(self))
    }

    async fn system_roles(&self) -> Result<Vec<GrantedAuthority>, RoleLookupError> {
        Ok(Service::system_roles(self))
    }
}
