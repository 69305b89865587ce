//! Durable Store
//!
//! Document collection holding the source of truth for items.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::clock::current_timestamp_ms;
use crate::error::{StoreError, StoreResult};
use crate::inventory::{Document, DocumentId, Item};

// == Document Store Trait ==
/// Durable item storage keyed by `item_id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Exact-match lookup on `item_id`.
    async fn find_by_item_id(&self, item_id: i64) -> StoreResult<Option<Document>>;

    /// Persists a new document and returns its assigned id.
    ///
    /// Implementations backed by a unique index report a clash as
    /// [`StoreError::DuplicateKey`].
    async fn insert(&self, item: &Item) -> StoreResult<DocumentId>;

    /// Number of stored documents.
    async fn count(&self) -> StoreResult<usize>;
}

// == Memory Collection ==
#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Document>,
    /// Unique index: item_id -> position in `documents`
    by_item_id: HashMap<i64, usize>,
    next_sequence: u64,
}

/// In-process [`DocumentStore`] with a unique index on `item_id`.
///
/// The index check and the insert happen under one write lock, so two
/// concurrent inserts of the same `item_id` cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    inner: RwLock<Collection>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryCollection {
    async fn find_by_item_id(&self, item_id: i64) -> StoreResult<Option<Document>> {
        let collection = self.inner.read().await;

        Ok(collection
            .by_item_id
            .get(&item_id)
            .map(|&pos| collection.documents[pos].clone()))
    }

    async fn insert(&self, item: &Item) -> StoreResult<DocumentId> {
        let mut collection = self.inner.write().await;

        if collection.by_item_id.contains_key(&item.item_id) {
            return Err(StoreError::DuplicateKey(item.item_id));
        }

        collection.next_sequence += 1;
        let timestamp_secs = (current_timestamp_ms() / 1000) as u32;
        let id = DocumentId::new(timestamp_secs, collection.next_sequence);

        // The assigned id wins over anything the caller sent as `_id`
        let mut body = item.clone();
        body.id = None;

        let pos = collection.documents.len();
        collection.documents.push(Document { id, item: body });
        collection.by_item_id.insert(item.item_id, pos);

        debug!(item_id = item.item_id, %id, "Inserted document");
        Ok(id)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.inner.read().await.documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryCollection::new();
        let item = Item::new(1).with_field("name", "bolt");

        let id = store.insert(&item).await.unwrap();
        let doc = store.find_by_item_id(1).await.unwrap().unwrap();

        assert_eq!(doc.id, id);
        assert_eq!(doc.item, item);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = MemoryCollection::new();
        assert!(store.find_by_item_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate() {
        let store = MemoryCollection::new();
        store.insert(&Item::new(1)).await.unwrap();

        let result = store.insert(&Item::new(1).with_field("name", "other")).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(1))));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = MemoryCollection::new();
        let a = store.insert(&Item::new(1)).await.unwrap();
        let b = store.insert(&Item::new(2)).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_caller_supplied_id_is_replaced() {
        let store = MemoryCollection::new();
        let mut item = Item::new(5).with_field("qty", 1);
        item.id = Some("caller-chosen".to_string());

        let id = store.insert(&item).await.unwrap();
        let returned = store.find_by_item_id(5).await.unwrap().unwrap().into_item();

        assert_eq!(returned.id, Some(id.to_string()));
        assert_eq!(returned.fields["qty"], json!(1));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_same_item_id() {
        let store = Arc::new(MemoryCollection::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(&Item::new(77)).await })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
