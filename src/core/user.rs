use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::common::{debug, trace, warn, ErrorKind, Result};
use crate::core::{Credential, Identity, NoRoles, RoleFetcher, Roles};

/// Authentication information about a user, with lazily loaded roles.
///
/// Roles are either supplied at construction or fetched once by the
/// [`RoleFetcher`] on the first successful
/// [`ensure_roles_loaded`](AuthenticatedUser::ensure_roles_loaded).
/// After that the roles never change.
pub struct AuthenticatedUser {
    identity: Option<Box<dyn Identity>>,
    // Set exactly once. initialized() is the loaded flag.
    roles: OnceCell<Roles>,
    fetcher: Arc<dyn RoleFetcher>,
}

impl AuthenticatedUser {
    /// `Some(roles)` marks the roles as loaded and `fetcher` is never called.
    pub fn new(
        identity: Option<Box<dyn Identity>>,
        roles: Option<Vec<String>>,
        fetcher: Arc<dyn RoleFetcher>,
    ) -> Self {
        Self {
            identity,
            roles: OnceCell::new_with(roles.map(Roles::from)),
            fetcher,
        }
    }

    pub fn with_roles(identity: impl Identity + 'static, roles: Vec<String>) -> Self {
        AuthenticatedUser::new(Some(Box::new(identity)), Some(roles), Arc::new(NoRoles))
    }

    pub fn lazy(identity: impl Identity + 'static, fetcher: impl RoleFetcher + 'static) -> Self {
        AuthenticatedUser::new(Some(Box::new(identity)), None, Arc::new(fetcher))
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.as_deref().map(|identity| identity.name())
    }

    pub fn identity(&self) -> Option<&dyn Identity> {
        self.identity.as_deref()
    }

    /// Current roles. Empty until loaded, never triggers a load.
    pub fn roles(&self) -> Roles {
        self.roles.get().cloned().unwrap_or_else(Roles::empty)
    }

    pub fn roles_loaded(&self) -> bool {
        self.roles.initialized()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.get().is_some_and(|roles| roles.contains(role))
    }

    /// Fetch roles unless already loaded.
    ///
    /// Concurrent callers are serialized, only one of them runs the fetcher
    /// and the rest wait for its result. A failed fetch leaves the roles
    /// unloaded and empty so the next call tries again.
    pub async fn ensure_roles_loaded(&self) -> Result<()> {
        if self.roles.initialized() {
            trace!(user=?self.name(), "Roles already loaded");
            return Ok(());
        }

        self.roles.get_or_try_init(|| self.fetch_roles()).await?;

        Ok(())
    }

    async fn fetch_roles(&self) -> Result<Roles> {
        let user = self.name();
        debug!(?user, "Fetch roles");

        match self.fetcher.fetch_roles(user).await {
            Ok(roles) => {
                debug!(?user, count = roles.len(), "Roles loaded");
                Ok(Roles::from(roles))
            }
            Err(err) => {
                warn!(?user, %err, "Fetch roles failed");
                Err(ErrorKind::FetchRoles(err).into())
            }
        }
    }

    /// Delegate to the identity.
    ///
    /// Fails with [`ErrorKind::MissingIdentity`] if the user has no identity.
    pub fn check_credential(&self, credential: &Credential) -> Result<bool> {
        let identity = self
            .identity
            .as_deref()
            .ok_or(ErrorKind::MissingIdentity)?;

        Ok(identity.authenticate(credential))
    }
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("name", &self.name())
            .field("roles_loaded", &self.roles_loaded())
            .field("roles", &self.roles())
            .finish()
    }
}
