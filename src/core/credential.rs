use std::fmt;

/// Credential supplied by a caller, or expected by an identity.
///
/// The scheme is opaque to [`AuthenticatedUser`](crate::AuthenticatedUser),
/// it only hands the value to the identity.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Password(String),
    Token(String),
}

impl Credential {
    pub fn password(password: impl Into<String>) -> Self {
        Credential::Password(password.into())
    }

    pub fn token(token: impl Into<String>) -> Self {
        Credential::Token(token.into())
    }

    fn scheme(&self) -> &'static str {
        match self {
            Credential::Password(_) => "password",
            Credential::Token(_) => "token",
        }
    }
}

// Never print the secret.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Credential::{}(***)", self.scheme())
    }
}
