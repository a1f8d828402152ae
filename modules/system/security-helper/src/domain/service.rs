//! Domain service for the security helper.

use std::future::Future;
use std::sync::Arc;

use acl_voter_sdk::{AclHolder, AclVoterClient, AclVoterError, Permission};
use role_lookup_sdk::RoleLookupClient;
use surrogate_security::{
    Authentication, GrantedAuthority, NoParameters, ParameterProvider, Principal,
    SecurityContext, ambient,
};
use tracing::{Instrument, debug, info_span, warn};

use crate::config::SecurityHelperConfig;
use crate::error::SecurityHelperError;

/// Impersonation and authentication context manager.
///
/// The "current identity" lives in the task-local [`ambient`] slot. The
/// `run_as_*` family installs a substitute for the duration of one unit of
/// work and the previous identity is back once the returned future completes,
/// fails, panics or is dropped. [`SecurityHelper::become_user`] overwrites the
/// innermost frame instead and nothing restores it.
///
/// Authorization queries go to the configured [`AclVoterClient`] and fail
/// closed: a voter error is logged and answered with `false`.
pub struct SecurityHelper {
    roles: Arc<dyn RoleLookupClient>,
    voter: Arc<dyn AclVoterClient>,
    config: SecurityHelperConfig,
}

impl SecurityHelper {
    #[must_use]
    pub fn new(
        roles: Arc<dyn RoleLookupClient>,
        voter: Arc<dyn AclVoterClient>,
        config: SecurityHelperConfig,
    ) -> Self {
        Self {
            roles,
            voter,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SecurityHelperConfig {
        &self.config
    }

    /// Run `work` inside a fresh, empty ambient frame.
    ///
    /// This is the frame [`Self::become_user`] writes into when no
    /// `run_as_*` call is active.
    pub fn with_root_scope<F: Future>(work: F) -> impl Future<Output = F::Output> {
        ambient::root(work)
    }

    /// Build an authentication record for `principal` from the role-lookup service.
    ///
    /// The service is consulted on every call.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityHelperError::RoleLookup`] when the lookup fails.
    #[tracing::instrument(skip_all)]
    pub async fn create_authentication(
        &self,
        principal: impl Into<Principal>,
    ) -> Result<Authentication, SecurityHelperError> {
        let principal = principal.into();
        let roles = self.roles.roles_for_user(&principal).await.map_err(|e| {
            warn!(principal = %principal, error = %e, "role lookup failed");
            SecurityHelperError::RoleLookup {
                principal: principal.to_string(),
                source: e,
            }
        })?;

        debug!(principal = %principal, role_count = roles.len(), "built authentication");
        Ok(Authentication::builder(principal).authorities(roles).build())
    }

    /// Build, without installing, a session for `principal` seeded from `params`.
    ///
    /// # Errors
    ///
    /// As for [`Self::create_authentication`].
    pub async fn create_session(
        &self,
        principal: impl Into<Principal>,
        params: &dyn ParameterProvider,
    ) -> Result<SecurityContext, SecurityHelperError> {
        let authentication = self.create_authentication(principal).await?;
        Ok(SecurityContext::builder(authentication)
            .parameters(params)
            .build())
    }

    /// Replace the ambient identity with a session for `principal`.
    ///
    /// Irreversible: nothing restores the previous identity. Meant for tests;
    /// use [`Self::run_as_user`] to impersonate for a bounded unit of work.
    ///
    /// # Errors
    ///
    /// - [`SecurityHelperError::RoleLookup`] when roles cannot be resolved
    /// - [`SecurityHelperError::Ambient`] outside any ambient frame
    pub async fn become_user(
        &self,
        principal: impl Into<Principal>,
    ) -> Result<(), SecurityHelperError> {
        self.become_user_with(principal, &NoParameters).await
    }

    /// [`Self::become_user`] with session attributes taken from `params`.
    ///
    /// # Errors
    ///
    /// As for [`Self::become_user`].
    pub async fn become_user_with(
        &self,
        principal: impl Into<Principal>,
        params: &dyn ParameterProvider,
    ) -> Result<(), SecurityHelperError> {
        let session = self.create_session(principal, params).await?;
        warn!(principal = %session.principal(), "replacing ambient identity without restore");
        ambient::replace(Arc::new(session))?;
        Ok(())
    }

    /// Run `work` as `principal`, restoring the caller's identity afterwards.
    ///
    /// The work's result is returned as is, including its error.
    ///
    /// # Errors
    ///
    /// Whatever `work` returns, or [`SecurityHelperError::RoleLookup`]
    /// converted into `E` when the principal's roles cannot be resolved (in
    /// which case `work` is never called).
    pub async fn run_as_user<T, E, F, Fut>(
        &self,
        principal: impl Into<Principal>,
        work: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<SecurityHelperError>,
    {
        self.run_as_user_with(principal, &NoParameters, work).await
    }

    /// [`Self::run_as_user`] with session attributes taken from `params`.
    ///
    /// # Errors
    ///
    /// As for [`Self::run_as_user`].
    pub async fn run_as_user_with<T, E, F, Fut>(
        &self,
        principal: impl Into<Principal>,
        params: &dyn ParameterProvider,
        work: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<SecurityHelperError>,
    {
        let session = self.create_session(principal, params).await?;
        run_as(session, work).await
    }

    /// Run `work` as the anonymous principal, restoring the caller's identity afterwards.
    pub async fn run_as_anonymous<F, Fut>(&self, work: F) -> Fut::Output
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let authentication = Authentication::builder(self.config.anonymous_principal.as_str())
            .authority(self.config.anonymous_authority.as_str())
            .unauthenticated()
            .build();
        run_as(SecurityContext::builder(authentication).build(), work).await
    }

    /// Run `work` as the fully privileged system principal, restoring the
    /// caller's identity afterwards.
    ///
    /// The system identity comes from configuration; the role-lookup service
    /// is not consulted.
    pub async fn run_as_system<F, Fut>(&self, work: F) -> Fut::Output
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let authentication = Authentication::builder(self.config.system_principal.as_str())
            .authorities(self.config.system_authorities.iter().map(String::as_str))
            .build();
        run_as(SecurityContext::builder(authentication).build(), work).await
    }

    /// Whether the session belongs to an administrator.
    #[deprecated(note = "use `can_administer`, which checks the ambient session")]
    pub async fn is_administrator(&self, ctx: &SecurityContext) -> bool {
        self.administrator_decision(ctx).await
    }

    /// Whether the ambient session belongs to an administrator.
    ///
    /// `false` when no identity is installed.
    pub async fn can_administer(&self) -> bool {
        match ambient::current() {
            Some(ctx) => self.administrator_decision(&ctx).await,
            None => false,
        }
    }

    /// Whether `role` is granted to the session.
    pub async fn is_granted(&self, ctx: &SecurityContext, role: &GrantedAuthority) -> bool {
        let outcome = self.voter.is_granted(ctx, role).await;
        fail_closed("is_granted", ctx, outcome)
    }

    /// Whether the session may perform `permission` on `holder`.
    #[deprecated(note = "query the ACL voter directly")]
    pub async fn has_access(
        &self,
        holder: &dyn AclHolder,
        permission: Permission,
        ctx: &SecurityContext,
    ) -> bool {
        let outcome = self.voter.has_access(ctx, holder, permission).await;
        fail_closed("has_access", ctx, outcome)
    }

    /// Authentication record of the ambient session, if any.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn get_authentication(&self) -> Option<Authentication> {
        ambient::current().map(|ctx| ctx.authentication().clone())
    }

    /// Same as [`Self::get_authentication`]; both arguments are ignored.
    #[deprecated(note = "use `get_authentication`")]
    #[must_use]
    pub fn get_authentication_for(
        &self,
        _session: &SecurityContext,
        _allow_anonymous: bool,
    ) -> Option<Authentication> {
        self.get_authentication()
    }

    /// The ambient session, if any.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn current_session(&self) -> Option<Arc<SecurityContext>> {
        ambient::current()
    }

    async fn administrator_decision(&self, ctx: &SecurityContext) -> bool {
        let outcome = self.voter.is_administrator(ctx).await;
        fail_closed("is_administrator", ctx, outcome)
    }
}

async fn run_as<F, Fut>(session: SecurityContext, work: F) -> Fut::Output
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let span = info_span!(
        "run_as",
        principal = %session.principal(),
        session_id = %session.session_id()
    );
    debug!(parent: &span, "installing substitute identity");
    ambient::scope(Arc::new(session), async move { work().await })
        .instrument(span)
        .await
}

fn fail_closed(op: &str, ctx: &SecurityContext, outcome: Result<bool, AclVoterError>) -> bool {
    outcome.unwrap_or_else(|e| {
        warn!(
            operation = op,
            principal = %ctx.principal(),
            error = %e,
            "acl voter failed; denying"
        );
        false
    })
}
