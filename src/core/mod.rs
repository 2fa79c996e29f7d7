mod credential;
pub use self::credential::Credential;

mod principal;
pub use self::principal::{Identity, UserPrincipal};

mod roles;
pub use self::roles::{NoRoles, RoleFetcher, Roles, StaticRoles};

mod user;
pub use self::user::AuthenticatedUser;
