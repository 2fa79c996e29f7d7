#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{
    AuthenticatedUser, Credential, Identity, NoRoles, RoleFetcher, Roles, StaticRoles,
    UserPrincipal,
};
pub use crate::error::{Error, ErrorKind};
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

pub(crate) mod common {
    pub(crate) use crate::error::ErrorKind;
    pub(crate) use crate::Result;

    pub use tracing::{debug, info, trace, warn};
}
