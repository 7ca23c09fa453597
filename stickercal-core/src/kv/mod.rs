//! Key-value storage.
//!
//! Records are JSON values under string keys. Apart from single-key access,
//! the only query is a key-prefix scan.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StickerResult;

/// A generic key-value namespace.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> StickerResult<Option<Value>>;

    /// Insert or overwrite.
    async fn set(&self, key: &str, value: Value) -> StickerResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn del(&self, key: &str) -> StickerResult<()>;

    /// Every value whose key starts with `prefix`, in store iteration order.
    async fn get_by_prefix(&self, prefix: &str) -> StickerResult<Vec<Value>>;
}
