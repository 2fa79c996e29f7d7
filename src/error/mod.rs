use std::error;
use std::fmt;
use std::io;

use backtrace::Backtrace;

/// Error returned by role fetchers.
pub type BoxError = Box<dyn error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub enum ErrorKind {
    // Role fetcher failed. the cache is left unloaded.
    FetchRoles(BoxError),
    // Credential check requested on a user without identity.
    MissingIdentity,
    Io(io::Error),
    Config(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::FetchRoles(err) => write!(f, "fetch roles failed. {}", err),
            ErrorKind::MissingIdentity => write!(f, "user has no identity"),
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Config(err) => write!(f, "invalid config. {}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Config(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingIdentity)
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind() {
            ErrorKind::FetchRoles(err) => Some(err.as_ref()),
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Config(err) => Some(err),
            ErrorKind::MissingIdentity => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fetch_roles() {
        let err = Error::from(ErrorKind::FetchRoles("connection refused".into()));
        assert_eq!(err.to_string(), "fetch roles failed. connection refused");
        assert!(error::Error::source(&err).is_some());
        assert!(err.backtrace().is_some());
    }

    #[test]
    fn missing_identity() {
        let err = Error::from(ErrorKind::MissingIdentity);
        assert!(err.is_missing_identity());
        assert!(error::Error::source(&err).is_none());
    }
}
