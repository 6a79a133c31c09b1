//! The cart store.
//!
//! Single source of truth for the cart of the active identity. Every
//! mutation is synchronous, applies in call order, and is followed by a
//! full-snapshot persist before control returns, so a reload at any point
//! observes the last completed operation.
//!
//! The store owns no event loop. The host wires two signals into it:
//! [`CartStore::auth_changed`] after login/logout, and
//! [`CartStore::external_change`] when another context writes to the same
//! storage area. Both re-resolve the identity key and reload, so the tab
//! that wrote last wins.

use std::sync::Arc;

use rust_decimal::Decimal;

use marzipan_core::{CartLine, Product, ProductId};

use crate::identity::IdentityProvider;
use crate::key::{CartKey, LEGACY_CART_KEY};
use crate::snapshot;
use crate::storage::Storage;

/// Handle to a registered cart observer, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&[CartLine]) + Send>;

/// Identity-scoped, durably persisted shopping cart.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    identity: Arc<dyn IdentityProvider>,
    key: CartKey,
    lines: Vec<CartLine>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl CartStore {
    /// Build a store for the current identity.
    ///
    /// Resolves the storage key from `identity`, loads the persisted
    /// snapshot if one exists, and otherwise attempts the one-time
    /// migration of the legacy unscoped `cart` key before starting empty.
    /// Storage failures degrade to an empty cart.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, identity: Arc<dyn IdentityProvider>) -> Self {
        let key = CartKey::for_identity(identity.current_user());
        let lines = load_or_migrate(storage.as_ref(), &key);
        Self {
            storage,
            identity,
            key,
            lines,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// An existing line for the same product id gets its quantity bumped
    /// by one; otherwise a new line is appended, preserving first-add
    /// order.
    pub fn add_to_cart(&mut self, product: Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product)),
        }
        self.persist();
        self.notify();
    }

    /// Remove the line for `product_id` entirely. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product.id != product_id);
        self.persist();
        self.notify();
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero removes the line, matching
    /// [`remove_from_cart`](Self::remove_from_cart). Absent product ids
    /// are a silent no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity;
        }
        self.persist();
        self.notify();
    }

    /// Empty the cart. The checkout flow calls this after the
    /// order-creation endpoint reports success.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.persist();
        self.notify();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The cart lines, in first-add order.
    #[must_use]
    pub fn cart_items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn cart_items_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// The storage key the cart currently persists under.
    #[must_use]
    pub const fn current_key(&self) -> &CartKey {
        &self.key
    }

    // =========================================================================
    // External signals
    // =========================================================================

    /// The authentication flow logged a user in or out. Re-resolve the
    /// identity key and reload that identity's cart.
    pub fn auth_changed(&mut self) {
        self.reload();
        self.notify();
    }

    /// Another context wrote `changed_key` in the shared storage area.
    /// Reloads only when the key is ours (or the legacy key, which a
    /// not-yet-migrated context may still write).
    pub fn external_change(&mut self, changed_key: &str) {
        if changed_key != self.key.storage_key() && changed_key != LEGACY_CART_KEY {
            return;
        }
        self.reload();
        self.notify();
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register an observer invoked with the new snapshot after every
    /// mutation and every signal-triggered reload.
    pub fn subscribe(&mut self, observer: impl Fn(&[CartLine]) + Send + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Release a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn reload(&mut self) {
        self.key = CartKey::for_identity(self.identity.current_user());
        self.lines = load_or_migrate(self.storage.as_ref(), &self.key);
    }

    fn persist(&self) {
        let Some(serialized) = snapshot::encode(&self.lines) else {
            return;
        };
        if let Err(e) = self.storage.set(&self.key.storage_key(), &serialized) {
            // Keep operating in memory; a later reload may lose this
            // change, which is the accepted degraded mode.
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
        }
    }

    fn notify(&self) {
        for (_, observer) in &self.subscribers {
            observer(&self.lines);
        }
    }
}

/// Load the snapshot under `key`, falling back to the one-time legacy
/// migration when the per-identity key has never been written.
fn load_or_migrate(storage: &dyn Storage, key: &CartKey) -> Vec<CartLine> {
    let storage_key = key.storage_key();
    match storage.get(&storage_key) {
        Ok(Some(raw)) => snapshot::decode(&raw),
        Ok(None) => migrate_legacy(storage, &storage_key),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read cart snapshot, starting empty");
            Vec::new()
        }
    }
}

/// Adopt the legacy unscoped snapshot, if any, as the initial cart for
/// `storage_key`. Best effort: the copy and the legacy delete are each
/// attempted once and failures only logged. Guarded by the caller on
/// "the target key does not exist yet," so a second initialization never
/// re-runs it.
fn migrate_legacy(storage: &dyn Storage, storage_key: &str) -> Vec<CartLine> {
    let raw = match storage.get(LEGACY_CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read legacy cart key, starting empty");
            return Vec::new();
        }
    };

    tracing::info!(key = storage_key, "Migrating legacy cart snapshot");
    if let Err(e) = storage.set(storage_key, &raw) {
        tracing::warn!(key = storage_key, error = %e, "Failed to copy legacy cart snapshot");
    }
    if let Err(e) = storage.remove(LEGACY_CART_KEY) {
        tracing::warn!(error = %e, "Failed to remove legacy cart key");
    }
    snapshot::decode(&raw)
}
