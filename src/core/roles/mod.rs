mod fetcher;
pub use self::fetcher::{NoRoles, RoleFetcher, StaticRoles};

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

/// Read only view of a user's role names.
///
/// Clones share the same allocation, so handing the view out never copies
/// the role names.
#[derive(Clone, PartialEq, Eq)]
pub struct Roles(Arc<[String]>);

impl Roles {
    /// Views of unloaded users all share one allocation.
    pub(crate) fn empty() -> Self {
        static EMPTY: OnceLock<Roles> = OnceLock::new();
        EMPTY.get_or_init(|| Roles(Arc::from(Vec::new()))).clone()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }
}

impl From<Vec<String>> for Roles {
    fn from(roles: Vec<String>) -> Self {
        Roles(Arc::from(roles))
    }
}

impl Deref for Roles {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Roles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl PartialEq<[String]> for Roles {
    fn eq(&self, other: &[String]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<Vec<String>> for Roles {
    fn eq(&self, other: &Vec<String>) -> bool {
        *self.0 == other[..]
    }
}

impl<'a> IntoIterator for &'a Roles {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let view = Roles::from(roles(&["user", "admin", "user"]));

        assert_eq!(view.len(), 3);
        assert_eq!(view, roles(&["user", "admin", "user"]));
        assert_eq!(view.first().map(String::as_str), Some("user"));
        assert!(view.contains("admin"));
        assert!(!view.contains("root"));
    }

    #[test]
    fn clone_shares_allocation() {
        let view = Roles::from(roles(&["user"]));
        let cloned = view.clone();

        assert!(Arc::ptr_eq(&view.0, &cloned.0));
    }

    #[test]
    fn empty_view() {
        let view = Roles::empty();
        assert!(view.is_empty());
        assert_eq!(format!("{:?}", view), "[]");
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn empty_views_share_allocation() {
        assert!(Arc::ptr_eq(&Roles::empty().0, &Roles::empty().0));
    }
}
