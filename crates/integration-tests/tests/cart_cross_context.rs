//! Two stores over one storage area: the multi-tab case.
//!
//! Each store only sees another context's writes when the host delivers
//! the storage-changed signal, and whichever context wrote last wins.
//! Also covers the checkout flow's contract with the store: clear the
//! cart once, on success only.

#![allow(clippy::unwrap_used)]

use marzipan_core::ProductId;
use rust_decimal::{Decimal, dec};

use marzipan_integration_tests::{TestOrigin, product};

#[test]
fn external_write_is_picked_up_on_signal() {
    let origin = TestOrigin::new();
    let mut tab_a = origin.open_store();
    let mut tab_b = origin.open_store();

    tab_a.add_to_cart(product("a", dec!(4.00)));

    // Tab B has not been signalled yet and still shows its own load
    assert!(tab_b.cart_items().is_empty());

    // The host forwards the storage-changed notification
    tab_b.external_change("guest");
    assert_eq!(tab_b.cart_items().len(), 1);
    assert_eq!(tab_b.cart_total(), dec!(4.00));
}

#[test]
fn unrelated_keys_do_not_trigger_reload() {
    let origin = TestOrigin::new();
    let mut tab = origin.open_store();
    tab.add_to_cart(product("a", dec!(1.00)));

    // Another identity's cart changed; ours must not reload
    origin.storage().set("identity:9", "[]").unwrap();
    tab.external_change("identity:9");
    assert_eq!(tab.cart_items().len(), 1);

    // The auth token record changing is also not our concern
    tab.external_change("token");
    assert_eq!(tab.cart_items().len(), 1);
}

#[test]
fn last_writer_wins_between_tabs() {
    let origin = TestOrigin::new();
    let mut tab_a = origin.open_store();
    let mut tab_b = origin.open_store();

    tab_a.add_to_cart(product("from-a", dec!(1.00)));
    tab_b.external_change("guest");

    // Both tabs mutate; B writes last
    tab_a.update_quantity(&ProductId::new("from-a"), 5);
    tab_b.add_to_cart(product("from-b", dec!(2.00)));

    // A reloads on the signal and observes B's snapshot wholesale
    tab_a.external_change("guest");
    assert_eq!(tab_a.cart_items(), tab_b.cart_items());
    let ids: Vec<&str> = tab_a
        .cart_items()
        .iter()
        .map(|l| l.product.id.as_str())
        .collect();
    assert_eq!(ids, ["from-a", "from-b"]);
    // B never saw A's quantity update, so it is gone
    assert_eq!(tab_a.cart_items()[0].quantity, 1);
}

#[test]
fn checkout_success_clears_cart_everywhere() {
    let origin = TestOrigin::new();
    let mut store = origin.open_store();
    store.add_to_cart(product("a", dec!(10.00)));
    store.add_to_cart(product("b", dec!(5.00)));

    // The checkout flow received a success response from the
    // order-creation endpoint and empties the cart.
    store.clear_cart();
    assert_eq!(store.cart_total(), Decimal::ZERO);

    // A fresh context sees the cleared cart too
    let other = origin.open_store();
    assert!(other.cart_items().is_empty());
}
