//! In-process store, lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::KvStore;
use crate::error::StickerResult;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StickerResult<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> StickerResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> StickerResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> StickerResult<Vec<Value>> {
        let entries = self.entries.read().await;

        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get_del() {
        let store = MemoryStore::new();

        store.set("event:1", json!({"title": "a"})).await.unwrap();
        assert_eq!(store.get("event:1").await.unwrap(), Some(json!({"title": "a"})));

        store.set("event:1", json!({"title": "b"})).await.unwrap();
        assert_eq!(store.get("event:1").await.unwrap(), Some(json!({"title": "b"})));

        store.del("event:1").await.unwrap();
        assert_eq!(store.get("event:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_del_missing_key() {
        let store = MemoryStore::new();
        assert!(store.del("event:nope").await.is_ok());
    }

    #[tokio::test]
    async fn test_get_by_prefix() {
        let store = MemoryStore::new();
        store.set("event:1", json!(1)).await.unwrap();
        store.set("event:2", json!(2)).await.unwrap();
        store.set("eventual", json!(3)).await.unwrap();
        store.set("note:1", json!(4)).await.unwrap();

        let mut values = store.get_by_prefix("event:").await.unwrap();
        values.sort_by_key(|v| v.as_i64());
        assert_eq!(values, vec![json!(1), json!(2)]);
    }
}
