//! Key-value backends.
//!
//! A backend stores opaque string values under string keys. Values are
//! always replaced whole; there is no partial update.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Minimal key-value persistence used by the roster.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
