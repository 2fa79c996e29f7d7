use async_trait::async_trait;

use crate::error::BoxError;

/// Retrieve the roles of a user from somewhere.
///
/// Called at most once per successful load. Implementations may block on
/// external I/O, concurrent callers of
/// [`ensure_roles_loaded`](crate::AuthenticatedUser::ensure_roles_loaded)
/// wait for the whole fetch.
#[async_trait]
pub trait RoleFetcher: Send + Sync {
    /// `user` is the name of the identity, if any.
    async fn fetch_roles(&self, user: Option<&str>) -> Result<Vec<String>, BoxError>;
}

/// Fetcher for users without any role source.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRoles;

#[async_trait]
impl RoleFetcher for NoRoles {
    async fn fetch_roles(&self, _user: Option<&str>) -> Result<Vec<String>, BoxError> {
        Ok(Vec::new())
    }
}

/// Fetcher returning a fixed list.
#[derive(Debug, Default, Clone)]
pub struct StaticRoles {
    roles: Vec<String>,
}

impl StaticRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl RoleFetcher for StaticRoles {
    async fn fetch_roles(&self, _user: Option<&str>) -> Result<Vec<String>, BoxError> {
        Ok(self.roles.clone())
    }
}
