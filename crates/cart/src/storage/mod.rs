//! Durable key-value storage abstraction.
//!
//! The cart store persists snapshots through this trait rather than
//! talking to a concrete medium. Hosts pick an adapter: [`FileStorage`]
//! for a local JSON file, [`MemoryStorage`] for tests and ephemeral use,
//! or their own implementation over whatever the platform provides.
//!
//! Writes are atomic per key: a reader sees either the previous value or
//! the new one, never a torn write. That is the only guarantee the cart
//! store relies on for its last-writer-wins cross-context behavior.

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors a storage adapter can produce.
///
/// The cart store absorbs all of these: they are logged and degraded
/// around, never returned to the view layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage medium is not accessible at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The write was rejected because the medium is full.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// An underlying I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable string key-value store.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single adapter can be shared between the store and its host. Keys and
/// values are strings because snapshots are JSON text.
pub trait Storage: Send + Sync {
    /// Read the value under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write cannot be completed.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
