//! Marzipan Cart - identity-scoped cart store.
//!
//! This crate is the single source of truth for "what is in the cart."
//! The store keeps an ordered list of cart lines in memory, persists a
//! full snapshot to durable key-value storage after every mutation, and
//! reloads itself when the active identity changes (login/logout) or when
//! another context writes to the same storage area.
//!
//! # Architecture
//!
//! - [`storage`] - The [`Storage`] key-value trait plus in-memory and
//!   file-backed adapters. Hosts supply whichever adapter matches their
//!   durable storage medium.
//! - [`identity`] - The [`IdentityProvider`] trait the store consults to
//!   resolve which user owns the cart. Injected, never read from ambient
//!   globals.
//! - [`key`] - Storage key derivation (`identity:<id>` / `guest`) and the
//!   legacy unscoped key kept for one-time migration.
//! - [`store`] - The [`CartStore`] itself: mutations, queries, subscriber
//!   notification, and the reload protocol.
//! - [`config`] - Environment-driven configuration for hosts embedding
//!   the file-backed adapter.
//!
//! # Failure policy
//!
//! Storage failures never reach the caller. A failed read behaves like an
//! empty cart; a failed write leaves the store operating in memory only.
//! Both are logged via `tracing`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use marzipan_cart::{CartStore, MemoryStorage, SharedIdentity};
//! use marzipan_core::{Price, Product, ProductId};
//! use rust_decimal::dec;
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let identity = Arc::new(SharedIdentity::guest());
//! let mut store = CartStore::new(storage, identity);
//!
//! store.add_to_cart(Product {
//!     id: ProductId::new("p-1"),
//!     name: "Almond Bar".to_owned(),
//!     price: Price::new(dec!(4.50)),
//!     image_url: None,
//! });
//! assert_eq!(store.cart_items_count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod identity;
pub mod key;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use identity::{IdentityProvider, SharedIdentity};
pub use key::CartKey;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CartStore, SubscriberId};
