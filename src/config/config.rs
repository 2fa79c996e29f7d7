use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tokio::fs;

use crate::common::{info, Result};
use crate::core::{AuthenticatedUser, Credential, RoleFetcher, UserPrincipal};

/// Users to construct at startup.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

#[derive(Deserialize, Clone)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
    // None means roles are fetched on demand.
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

// Never print the password.
impl fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserEntry")
            .field("username", &self.username)
            .field("password", &"***")
            .field("roles", &self.roles)
            .finish()
    }
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub async fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = Config::from_yaml_str(&content)?;

        info!(path=%path.display(), users=config.users.len(), "Config loaded");

        Ok(config)
    }

    /// Build every configured user. users without roles share `fetcher`.
    pub fn into_users(self, fetcher: Arc<dyn RoleFetcher>) -> Vec<AuthenticatedUser> {
        self.users
            .into_iter()
            .map(|entry| entry.into_user(fetcher.clone()))
            .collect()
    }
}

impl UserEntry {
    pub fn into_user(self, fetcher: Arc<dyn RoleFetcher>) -> AuthenticatedUser {
        let UserEntry {
            username,
            password,
            roles,
        } = self;
        let principal = UserPrincipal::new(username, Credential::Password(password));

        AuthenticatedUser::new(Some(Box::new(principal)), roles, fetcher)
    }
}
