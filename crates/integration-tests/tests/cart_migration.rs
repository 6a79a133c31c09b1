//! One-time migration of the legacy unscoped cart key.
//!
//! Clients that predate per-identity scoping persisted under a bare
//! `cart` key. The first store initialization that finds no scoped
//! snapshot adopts the legacy one, copies it to the scoped key, and
//! deletes the original.

#![allow(clippy::unwrap_used)]

use marzipan_cart::key::LEGACY_CART_KEY;
use marzipan_core::{ProductId, UserId};
use rust_decimal::dec;

use marzipan_integration_tests::TestOrigin;

fn seed_legacy(origin: &TestOrigin, lines_json: &str) {
    origin
        .storage()
        .set(LEGACY_CART_KEY, lines_json)
        .unwrap();
}

#[test]
fn legacy_snapshot_is_adopted_and_deleted() {
    let origin = TestOrigin::new();
    seed_legacy(
        &origin,
        r#"[{"id":"old-1","name":"Toffee","price":"7.00","quantity":3}]"#,
    );

    let store = origin.open_store();
    assert_eq!(store.cart_items().len(), 1);
    assert_eq!(store.cart_items()[0].product.id, ProductId::new("old-1"));
    assert_eq!(store.cart_items()[0].quantity, 3);
    assert_eq!(store.cart_total(), dec!(21.00));

    let storage = origin.storage();
    assert!(storage.get("guest").unwrap().is_some());
    assert_eq!(storage.get(LEGACY_CART_KEY).unwrap(), None);
}

#[test]
fn migration_targets_the_logged_in_identity() {
    let origin = TestOrigin::new();
    origin.identity.login(UserId::new("42"));
    seed_legacy(
        &origin,
        r#"[{"id":"old-1","name":"Toffee","price":"1.00","quantity":1}]"#,
    );

    let store = origin.open_store();
    assert_eq!(store.cart_items().len(), 1);

    let storage = origin.storage();
    assert!(storage.get("identity:42").unwrap().is_some());
    assert_eq!(storage.get("guest").unwrap(), None);
    assert_eq!(storage.get(LEGACY_CART_KEY).unwrap(), None);
}

#[test]
fn second_initialization_does_not_re_migrate() {
    let origin = TestOrigin::new();
    seed_legacy(
        &origin,
        r#"[{"id":"old-1","name":"Toffee","price":"7.00","quantity":3}]"#,
    );

    let mut first = origin.open_store();
    assert_eq!(first.cart_items_count(), 3);
    first.clear_cart();

    // The legacy snapshot must not resurrect on the next startup
    let second = origin.open_store();
    assert!(second.cart_items().is_empty());
}

#[test]
fn existing_scoped_snapshot_wins_over_legacy() {
    let origin = TestOrigin::new();
    origin
        .storage()
        .set(
            "guest",
            r#"[{"id":"new-1","name":"Fudge","price":"2.00","quantity":1}]"#,
        )
        .unwrap();
    seed_legacy(
        &origin,
        r#"[{"id":"old-1","name":"Toffee","price":"7.00","quantity":3}]"#,
    );

    let store = origin.open_store();
    assert_eq!(store.cart_items().len(), 1);
    assert_eq!(store.cart_items()[0].product.id, ProductId::new("new-1"));
}
