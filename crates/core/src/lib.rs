//! Marzipan Core - Shared types library.
//!
//! This crate provides common types used across all Marzipan components:
//! - `cart` - Identity-scoped shopping cart store
//! - `cli` - Command-line tools for inspecting persisted carts
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   cart line and product descriptors shared between components

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
