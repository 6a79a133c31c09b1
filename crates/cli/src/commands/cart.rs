//! Cart management commands.
//!
//! Each command opens the configured file storage, builds a store for the
//! requested identity, applies one operation, and prints the resulting
//! cart. Persistence happens inside the store, so nothing here writes
//! storage directly.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use marzipan_cart::{CartConfig, CartStore, SharedIdentity, Storage};
use marzipan_core::{Price, Product, ProductId, UserId};

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] marzipan_cart::ConfigError),

    /// The --price argument is not a decimal number.
    #[error("Invalid price '{0}': expected a decimal number like 2.50")]
    InvalidPrice(String),
}

fn open_store(identity: Option<UserId>) -> Result<CartStore, CartCommandError> {
    let config = CartConfig::from_env()?;
    tracing::debug!(path = %config.storage_path.display(), "Opening cart storage");

    let storage: Arc<dyn Storage> = Arc::new(config.open_storage());
    let provider = identity.map_or_else(SharedIdentity::guest, SharedIdentity::logged_in);
    Ok(CartStore::new(storage, Arc::new(provider)))
}

#[allow(clippy::print_stdout)] // Printing the cart is this command's output
fn print_cart(store: &CartStore) {
    if store.cart_items().is_empty() {
        println!("Cart '{}' is empty", store.current_key());
        return;
    }

    println!("Cart '{}':", store.current_key());
    for line in store.cart_items() {
        println!(
            "  {:<20} x{:<4} {:>10} (unit {})",
            line.product.name,
            line.quantity,
            format!("${:.2}", line.line_total()),
            line.product.price,
        );
    }
    println!("  {} item(s), total ${:.2}", store.cart_items_count(), store.cart_total());
}

/// Print the cart for the given identity.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
pub fn show(identity: Option<UserId>) -> Result<(), CartCommandError> {
    let store = open_store(identity)?;
    print_cart(&store);
    Ok(())
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns `CartCommandError::InvalidPrice` if `price` does not parse as
/// a decimal.
pub fn add(
    identity: Option<UserId>,
    id: &str,
    name: String,
    price: &str,
    image_url: Option<String>,
) -> Result<(), CartCommandError> {
    let amount = Decimal::from_str(price)
        .map_err(|_| CartCommandError::InvalidPrice(price.to_owned()))?;

    let mut store = open_store(identity)?;
    store.add_to_cart(Product {
        id: ProductId::new(id),
        name,
        price: Price::new(amount),
        image_url,
    });
    print_cart(&store);
    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
pub fn remove(identity: Option<UserId>, id: &str) -> Result<(), CartCommandError> {
    let mut store = open_store(identity)?;
    store.remove_from_cart(&ProductId::new(id));
    print_cart(&store);
    Ok(())
}

/// Set a line's quantity; zero removes the line.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
pub fn update(identity: Option<UserId>, id: &str, quantity: u32) -> Result<(), CartCommandError> {
    let mut store = open_store(identity)?;
    store.update_quantity(&ProductId::new(id), quantity);
    print_cart(&store);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
pub fn clear(identity: Option<UserId>) -> Result<(), CartCommandError> {
    let mut store = open_store(identity)?;
    store.clear_cart();
    print_cart(&store);
    Ok(())
}

/// Print the total number of units in the cart.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
#[allow(clippy::print_stdout)] // Printing the count is this command's output
pub fn count(identity: Option<UserId>) -> Result<(), CartCommandError> {
    let store = open_store(identity)?;
    println!("{}", store.cart_items_count());
    Ok(())
}

/// Print the cart total.
///
/// # Errors
///
/// Returns `CartCommandError::Config` if configuration loading fails.
#[allow(clippy::print_stdout)] // Printing the total is this command's output
pub fn total(identity: Option<UserId>) -> Result<(), CartCommandError> {
    let store = open_store(identity)?;
    println!("${:.2}", store.cart_total());
    Ok(())
}
