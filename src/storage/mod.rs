//! Key-value persistence backends for serialized record collections.

pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Storage key holding the serialized purchase collection.
pub const PURCHASES_KEY: &str = "cafe-purchases";
/// Storage key holding the serialized sale collection.
pub const SALES_KEY: &str = "cafe-sales";

/// String-keyed, string-valued persistence in the spirit of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
