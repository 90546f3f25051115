//! In-process document store.
//!
//! Keeps each collection as an insertion-ordered list of BSON documents.
//! Used for tests and for running the simulator without a database. An
//! outage switch makes the store refuse every call, including the probe.

use crate::store::{DocumentStore, StoreConnector};
use anyhow::{bail, Result};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store going down (`false`) or coming back (`true`).
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    fn collections(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Document>>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("memory store is unavailable");
        }
        // A poisoned lock only means another caller panicked mid-operation;
        // every operation leaves the map consistent.
        Ok(self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

fn matches_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id("_id").map(|oid| oid == *id).unwrap_or(false)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.collections().map(|_| ())
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId> {
        let id = ObjectId::new();
        let mut stored = doc! { "_id": id };
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        self.collections()?
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        Ok(self
            .collections()?
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn find_page(&self, collection: &str, skip: u64, limit: u64) -> Result<Vec<Document>> {
        let collections = self.collections()?;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(docs.iter().rev().skip(skip).take(limit).cloned().collect())
    }

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>> {
        Ok(self
            .collections()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches_id(d, &id)))
            .cloned())
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<bool> {
        let mut collections = self.collections()?;
        let Some(stored) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| matches_id(d, &id)))
        else {
            return Ok(false);
        };

        for (key, value) in fields {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<bool> {
        let mut collections = self.collections()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|d| matches_id(d, &id)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self, collection: &str) -> Result<u64> {
        Ok(self
            .collections()?
            .remove(collection)
            .map_or(0, |docs| docs.len() as u64))
    }
}

/// Connector handing out a shared [`MemoryStore`].
#[derive(Clone, Default)]
pub struct MemoryConnector {
    store: Arc<MemoryStore>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store every connection shares, for toggling outages in tests.
    pub fn store(&self) -> Arc<MemoryStore> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl StoreConnector for MemoryConnector {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>> {
        let store: Arc<dyn DocumentStore> = self.store.clone();
        Ok(store)
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_page_newest_first() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert("vehicle", doc! { "n": i }).await.unwrap();
        }

        let page = store.find_page("vehicle", 1, 2).await.unwrap();
        let values: Vec<i32> = page.iter().map(|d| d.get_i32("n").unwrap()).collect();
        assert_eq!(values, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_update_keeps_identifier() {
        let store = MemoryStore::new();
        let id = store.insert("crossing", doc! { "lane": 1 }).await.unwrap();

        let other = ObjectId::new();
        let updated = store
            .update_fields("crossing", id, doc! { "_id": other, "lane": 4 })
            .await
            .unwrap();
        assert!(updated);

        let stored = store.find_one("crossing", id).await.unwrap().unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), id);
        assert_eq!(stored.get_i32("lane").unwrap(), 4);
    }

    #[tokio::test]
    async fn test_unavailable_store_refuses_calls() {
        let store = MemoryStore::new();
        store.set_available(false);

        assert!(store.ping().await.is_err());
        assert!(store.count("vehicle").await.is_err());

        store.set_available(true);
        assert!(store.ping().await.is_ok());
    }
}
