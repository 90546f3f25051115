//! Document store backend traits.
//!
//! These traits abstract the storage backend so the same gateway logic works
//! with:
//! - MongoDB (`MongoStore`)
//! - an in-process store (`MemoryStore`)

use anyhow::Result;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;
use std::sync::Arc;

/// Operations the gateway needs from a document store.
///
/// Identifiers are store-native here; the gateway translates them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lightweight liveness probe.
    async fn ping(&self) -> Result<()>;

    /// Insert a document and return the identifier the store assigned.
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId>;

    async fn count(&self, collection: &str) -> Result<u64>;

    /// Documents newest-first (by insertion order), after skipping `skip`,
    /// at most `limit` of them.
    async fn find_page(&self, collection: &str, skip: u64, limit: u64) -> Result<Vec<Document>>;

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>>;

    /// Set the given top-level fields. Returns whether a document matched.
    async fn update_fields(&self, collection: &str, id: ObjectId, fields: Document)
        -> Result<bool>;

    /// Returns whether a document was deleted.
    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<bool>;

    /// Delete every document in the collection and return how many were removed.
    async fn delete_all(&self, collection: &str) -> Result<u64>;

    /// Release the connection. Further calls may fail.
    async fn close(&self) {}
}

/// Factory for store connections.
///
/// Called by the gateway on every `connect()`, so a gateway can reconnect
/// after being disconnected.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>>;

    /// Human-readable description of the target, for logs.
    fn describe(&self) -> String;
}
