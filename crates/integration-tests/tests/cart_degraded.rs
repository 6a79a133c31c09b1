//! Cart behavior when the storage medium is broken.
//!
//! A broken medium must never crash the view layer: reads degrade to an
//! empty cart, writes are swallowed, and the store keeps serving its
//! in-memory state.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use marzipan_cart::{CartStore, FileStorage, IdentityProvider, SharedIdentity, Storage};
use rust_decimal::dec;

use marzipan_integration_tests::{TestOrigin, product};

/// A store whose backing file lives in a directory that does not exist:
/// every read misses and every write fails.
fn broken_store() -> CartStore {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(
        "/nonexistent/marzipan-test/cart-store.json",
    ));
    CartStore::new(
        storage,
        Arc::new(SharedIdentity::guest()) as Arc<dyn IdentityProvider>,
    )
}

#[test]
fn store_operates_in_memory_when_writes_fail() {
    let mut store = broken_store();

    store.add_to_cart(product("a", dec!(3.00)));
    store.add_to_cart(product("a", dec!(3.00)));
    store.add_to_cart(product("b", dec!(1.50)));
    store.update_quantity(&marzipan_core::ProductId::new("b"), 4);

    assert_eq!(store.cart_items().len(), 2);
    assert_eq!(store.cart_total(), dec!(12.00));
    assert_eq!(store.cart_items_count(), 6);
}

#[test]
fn corrupt_storage_file_degrades_to_empty_cart() {
    let origin = TestOrigin::new();

    // Scribble over the whole storage area
    let storage = origin.storage();
    storage.set("guest", "[[[ not a cart").unwrap();

    let mut store = origin.open_store();
    assert!(store.cart_items().is_empty());

    // The store recovers: the next mutation persists a clean snapshot
    store.add_to_cart(product("a", dec!(2.00)));
    let reloaded = origin.open_store();
    assert_eq!(reloaded.cart_items_count(), 1);
}
