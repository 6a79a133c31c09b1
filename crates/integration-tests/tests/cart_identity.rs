//! Identity switching between persisted carts.
//!
//! Each identity owns its cart exclusively: logging in, out, and back in
//! must surface exactly that identity's persisted lines, untouched by
//! whatever other identities did in between.

#![allow(clippy::unwrap_used)]

use marzipan_core::{ProductId, UserId};
use rust_decimal::dec;

use marzipan_integration_tests::{TestOrigin, product};

#[test]
fn switching_identities_swaps_whole_carts() {
    let origin = TestOrigin::new();

    // User 1 builds cart A
    origin.identity.login(UserId::new("1"));
    let mut store = origin.open_store();
    store.add_to_cart(product("a1", dec!(10.00)));
    store.add_to_cart(product("a2", dec!(5.00)));

    // User 2 builds cart B
    origin.identity.login(UserId::new("2"));
    store.auth_changed();
    assert!(store.cart_items().is_empty());
    store.add_to_cart(product("b1", dec!(3.00)));

    // Switching back to user 1 yields cart A unchanged
    origin.identity.login(UserId::new("1"));
    store.auth_changed();
    let ids: Vec<&str> = store
        .cart_items()
        .iter()
        .map(|l| l.product.id.as_str())
        .collect();
    assert_eq!(ids, ["a1", "a2"]);
    assert_eq!(store.cart_total(), dec!(15.00));

    // And forward again yields exactly cart B
    origin.identity.login(UserId::new("2"));
    store.auth_changed();
    assert_eq!(store.cart_items().len(), 1);
    assert_eq!(store.cart_items()[0].product.id, ProductId::new("b1"));
}

#[test]
fn guest_cart_survives_a_login_session() {
    let origin = TestOrigin::new();

    let mut store = origin.open_store();
    store.add_to_cart(product("g1", dec!(2.00)));

    origin.identity.login(UserId::new("7"));
    store.auth_changed();
    store.add_to_cart(product("u1", dec!(9.00)));

    origin.identity.logout();
    store.auth_changed();
    assert_eq!(store.cart_items().len(), 1);
    assert_eq!(store.cart_items()[0].product.id, ProductId::new("g1"));
}

#[test]
fn persisted_cart_reloads_in_fresh_store() {
    let origin = TestOrigin::new();
    origin.identity.login(UserId::new("1"));

    let mut store = origin.open_store();
    store.add_to_cart(product("a", dec!(1.25)));
    store.add_to_cart(product("a", dec!(1.25)));
    store.add_to_cart(product("b", dec!(4.00)));
    drop(store);

    // A brand-new store over the same origin sees identical lines
    let reloaded = origin.open_store();
    assert_eq!(reloaded.cart_items().len(), 2);
    assert_eq!(reloaded.cart_items()[0].quantity, 2);
    assert_eq!(reloaded.cart_total(), dec!(6.50));
    assert_eq!(reloaded.cart_items_count(), 3);
}
