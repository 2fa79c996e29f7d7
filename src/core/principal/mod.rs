use std::fmt;

use crate::core::Credential;

/// Verified subject of an authentication event.
pub trait Identity: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Verify supplied credential against this identity.
    fn authenticate(&self, credential: &Credential) -> bool;
}

/// Identity that accepts exactly one credential.
#[derive(Debug, Clone)]
pub struct UserPrincipal {
    name: String,
    credential: Credential,
}

impl UserPrincipal {
    pub fn new(name: impl Into<String>, credential: Credential) -> Self {
        Self {
            name: name.into(),
            credential,
        }
    }
}

impl Identity for UserPrincipal {
    fn name(&self) -> &str {
        &self.name
    }

    fn authenticate(&self, credential: &Credential) -> bool {
        self.credential == *credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_by_password() {
        let principal = UserPrincipal::new("alice", Credential::password("secret"));

        assert_eq!(principal.name(), "alice");
        assert!(principal.authenticate(&Credential::password("secret")));
        assert!(!principal.authenticate(&Credential::password("other")));
        // same secret, different scheme
        assert!(!principal.authenticate(&Credential::token("secret")));
    }
}
