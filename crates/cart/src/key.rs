//! Storage key derivation.
//!
//! Each identity gets its own cart key so carts never bleed across
//! logins: `identity:<userId>` for a logged-in user, the fixed `guest`
//! key otherwise. The unscoped `cart` key predates per-identity scoping
//! and is read once at startup for migration, then deleted.

use marzipan_core::UserId;

/// The pre-scoping storage key, retained only for one-time migration.
pub const LEGACY_CART_KEY: &str = "cart";

/// Prefix for logged-in identity keys.
const IDENTITY_PREFIX: &str = "identity:";

/// The fixed key used when nobody is logged in.
const GUEST_KEY: &str = "guest";

/// The storage-key namespace owning a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartKey {
    /// Cart of a logged-in user.
    Identity(UserId),
    /// Cart of an anonymous session.
    Guest,
}

impl CartKey {
    /// Derive the key for the given identity.
    #[must_use]
    pub fn for_identity(user: Option<UserId>) -> Self {
        user.map_or(Self::Guest, Self::Identity)
    }

    /// The durable-storage key this cart persists under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            Self::Identity(user) => format!("{IDENTITY_PREFIX}{user}"),
            Self::Guest => GUEST_KEY.to_owned(),
        }
    }
}

impl std::fmt::Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
