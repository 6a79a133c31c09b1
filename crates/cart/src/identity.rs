//! Identity resolution for cart ownership.
//!
//! The store never reads the logged-in user from ambient state. It asks
//! an injected [`IdentityProvider`] at construction time and again
//! whenever the host fires the auth-changed signal. The authentication
//! flow owns the identity record; the cart only reads the user id from
//! it to derive a storage key.

use std::sync::Mutex;

use marzipan_core::UserId;

/// Source of the currently logged-in user, if any.
pub trait IdentityProvider: Send + Sync {
    /// The active user's id, or `None` when browsing as a guest.
    fn current_user(&self) -> Option<UserId>;
}

/// A `Mutex`-backed [`IdentityProvider`] the host flips on login/logout.
///
/// # Example
///
/// ```rust
/// use marzipan_cart::{IdentityProvider, SharedIdentity};
/// use marzipan_core::UserId;
///
/// let identity = SharedIdentity::guest();
/// assert_eq!(identity.current_user(), None);
///
/// identity.login(UserId::new("u-1"));
/// assert_eq!(identity.current_user(), Some(UserId::new("u-1")));
///
/// identity.logout();
/// assert_eq!(identity.current_user(), None);
/// ```
#[derive(Debug, Default)]
pub struct SharedIdentity {
    current: Mutex<Option<UserId>>,
}

impl SharedIdentity {
    /// Create a provider with no logged-in user.
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    /// Create a provider already logged in as `user`.
    #[must_use]
    pub fn logged_in(user: UserId) -> Self {
        Self {
            current: Mutex::new(Some(user)),
        }
    }

    /// Record a login. The host should follow this with
    /// `CartStore::auth_changed`.
    pub fn login(&self, user: UserId) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(user);
        }
    }

    /// Record a logout. The host should follow this with
    /// `CartStore::auth_changed`.
    pub fn logout(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }
}

impl IdentityProvider for SharedIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}
