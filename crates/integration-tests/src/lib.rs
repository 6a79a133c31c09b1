//! Integration tests for Marzipan.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marzipan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_identity` - Identity switching between persisted carts
//! - `cart_migration` - One-time legacy key migration
//! - `cart_cross_context` - Two stores sharing one storage file (the
//!   multi-tab case) and the checkout-clears-cart flow
//! - `cart_degraded` - Behavior when the storage medium is broken
//!
//! The helpers here stand in for a browser host: one temp file per test
//! plays the role of the origin's storage area, and each `FileStorage`
//! adapter over it plays the role of one tab.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use marzipan_cart::{CartStore, FileStorage, IdentityProvider, SharedIdentity, Storage};
use marzipan_core::{Price, Product, ProductId};

/// A simulated browser origin: one storage file plus the shared identity
/// signal every "tab" observes.
pub struct TestOrigin {
    _dir: TempDir,
    storage_path: PathBuf,
    /// The identity shared by all stores opened against this origin.
    pub identity: Arc<SharedIdentity>,
}

impl Default for TestOrigin {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOrigin {
    /// Create a fresh origin with an empty storage area and a guest
    /// identity.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let storage_path = dir.path().join("cart-store.json");
        Self {
            _dir: dir,
            storage_path,
            identity: Arc::new(SharedIdentity::guest()),
        }
    }

    /// A fresh storage adapter over this origin's file. Each adapter
    /// models an independent tab's handle on the same storage area.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::new(FileStorage::new(&self.storage_path))
    }

    /// Open a cart store as a new "tab" against this origin.
    #[must_use]
    pub fn open_store(&self) -> CartStore {
        CartStore::new(
            self.storage(),
            Arc::clone(&self.identity) as Arc<dyn IdentityProvider>,
        )
    }
}

/// Build a product descriptor for tests.
#[must_use]
pub fn product(id: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Price::new(price),
        image_url: None,
    }
}
