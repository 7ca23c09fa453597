//! Event storage on top of a key-value store.
//!
//! Each event lives under `event:{id}`. Listing is a prefix scan, so results
//! come back in whatever order the store iterates.

use std::sync::Arc;

use serde_json::Value;

use crate::error::StickerResult;
use crate::event::{Event, NewEvent, generate_id};
use crate::kv::KvStore;

const KEY_PREFIX: &str = "event:";

fn key_for(id: &str) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[derive(Clone)]
pub struct EventStore {
    kv: Arc<dyn KvStore>,
}

impl EventStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        EventStore { kv }
    }

    /// All stored events. Records that no longer decode as events are skipped.
    pub async fn list(&self) -> StickerResult<Vec<Event>> {
        let values = self.kv.get_by_prefix(KEY_PREFIX).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Event>(value) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable event record");
                    None
                }
            })
            .collect())
    }

    /// Validate the payload, assign a fresh id and persist it.
    pub async fn create(&self, new: NewEvent) -> StickerResult<Event> {
        new.validate()?;

        let event = new.into_event(generate_id());
        self.put(&event).await?;

        tracing::debug!(id = %event.id, date = %event.date, "created event");
        Ok(event)
    }

    /// Overwrite `event:{id}` with the payload. No existence check, no validation.
    pub async fn update(&self, id: &str, new: NewEvent) -> StickerResult<Event> {
        let event = new.into_event(id.to_string());
        self.put(&event).await?;
        Ok(event)
    }

    /// Remove an event. Unknown ids succeed too.
    pub async fn delete(&self, id: &str) -> StickerResult<()> {
        self.kv.del(&key_for(id)).await
    }

    async fn put(&self, event: &Event) -> StickerResult<()> {
        let value: Value = serde_json::to_value(event)?;
        self.kv.set(&key_for(&event.id), value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StickerError;
    use crate::kv::{FileStore, MemoryStore};
    use serde_json::json;
    use std::collections::HashSet;

    fn store() -> (EventStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (EventStore::new(kv.clone()), kv)
    }

    fn demo(date: &str, title: &str) -> NewEvent {
        NewEvent {
            date: Some(date.into()),
            title: Some(title.into()),
            color: Some("#FDE047".into()),
            rotation: Some(1.5),
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (events, kv) = store();

        let created = events.create(demo("2025-03-14", "Demo")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.date, "2025-03-14");
        assert_eq!(created.title, "Demo");
        assert_eq!(created.color.as_deref(), Some("#FDE047"));

        let stored = kv.get(&format!("event:{}", created.id)).await.unwrap();
        assert_eq!(stored, Some(serde_json::to_value(&created).unwrap()));

        assert_eq!(events.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let (events, _) = store();

        let mut ids = HashSet::new();
        for i in 0..50 {
            let event = events.create(demo("2025-01-01", &format!("e{i}"))).await.unwrap();
            ids.insert(event.id);
        }
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_create_without_title_persists_nothing() {
        let (events, _) = store();

        let err = events
            .create(NewEvent {
                title: None,
                ..demo("2025-03-14", "")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StickerError::Validation(_)));
        assert!(events.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_creates_minus_deletes() {
        let (events, _) = store();

        let mut created = Vec::new();
        for i in 0..5 {
            created.push(events.create(demo("2025-02-01", &format!("e{i}"))).await.unwrap());
        }
        for event in &created[..2] {
            events.delete(&event.id).await.unwrap();
        }

        let remaining = events.list().await.unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|e| e.id != created[0].id && e.id != created[1].id));
    }

    async fn create_concurrently(events: EventStore, count: usize) -> HashSet<String> {
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..count {
            let events = events.clone();
            tasks.spawn(async move { events.create(demo("2025-06-01", &format!("e{i}"))).await });
        }

        let mut ids = HashSet::new();
        while let Some(result) = tasks.join_next().await {
            ids.insert(result.unwrap().unwrap().id);
        }
        ids
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_memory() {
        let (events, _) = store();

        let ids = create_concurrently(events.clone(), 40).await;
        assert_eq!(ids.len(), 40);

        let listed = events.list().await.unwrap();
        assert_eq!(listed.len(), 40);
        assert!(listed.iter().all(|e| ids.contains(&e.id)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let events = EventStore::new(Arc::new(FileStore::new(&path)));

        let ids = create_concurrently(events.clone(), 40).await;
        assert_eq!(ids.len(), 40);

        let listed = events.list().await.unwrap();
        assert_eq!(listed.len(), 40);
        assert!(listed.iter().all(|e| ids.contains(&e.id)));

        // A fresh handle on the same file sees every write.
        let reopened = EventStore::new(Arc::new(FileStore::new(&path)));
        assert_eq!(reopened.list().await.unwrap().len(), 40);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let (events, _) = store();
        assert!(events.delete("does-not-exist").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_overwrites_without_existence_check() {
        let (events, _) = store();

        let updated = events.update("fresh", demo("2025-04-01", "New")).await.unwrap();
        assert_eq!(updated.id, "fresh");

        let partial = events.update("fresh", NewEvent::default()).await.unwrap();
        assert_eq!(partial.title, "");
        assert_eq!(events.list().await.unwrap(), vec![partial]);
    }

    #[tokio::test]
    async fn test_list_skips_foreign_records() {
        let (events, kv) = store();
        kv.set("event:broken", json!("not an event")).await.unwrap();
        kv.set("other:1", json!({"id": "1", "date": "2025-01-01", "title": "x"}))
            .await
            .unwrap();

        let created = events.create(demo("2025-01-01", "ok")).await.unwrap();
        assert_eq!(events.list().await.unwrap(), vec![created]);
    }
}
