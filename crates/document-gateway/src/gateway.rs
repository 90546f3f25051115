//! The document gateway: connection lifecycle plus collection operations.

use crate::document::{
    parse_external_id, to_store_document, DocumentPage, ListedDocument, StoredDocument,
};
use crate::error::GatewayError;
use crate::store::{DocumentStore, StoreConnector};
use crossing_core::{DocumentPatch, Entity, ID_FIELD};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Observable connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// `connect()` has never succeeded or been attempted.
    Uninitialized,
    Connected,
    /// Disconnected explicitly, a connect attempt failed, or a probe failed.
    Disconnected,
}

enum ConnectionState {
    Uninitialized,
    Connected(Arc<dyn DocumentStore>),
    Disconnected,
}

/// Documents removed by a full reset, per collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetSummary {
    pub deleted_counts: BTreeMap<String, u64>,
    pub total_deleted: u64,
}

/// Gateway over a document store, parameterized by collection name.
///
/// Constructed once per process and shared by reference (or `Arc`) between
/// request handlers. It holds no locks across store calls; concurrent
/// mutations of one document resolve at the store, last write wins.
pub struct DocumentGateway {
    connector: Box<dyn StoreConnector>,
    state: RwLock<ConnectionState>,
}

impl DocumentGateway {
    pub fn new(connector: impl StoreConnector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            state: RwLock::new(ConnectionState::Uninitialized),
        }
    }

    /// Establish the store connection and verify it with a probe.
    ///
    /// Failure is logged and leaves the gateway disconnected; it is never
    /// returned as an error. Returns whether the gateway is now connected.
    /// A connection held from an earlier `connect()` is closed and replaced.
    pub async fn connect(&self) -> bool {
        let target = self.connector.describe();
        let store = match self.connector.connect().await {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to connect to {target}: {e:#}");
                self.replace_state(ConnectionState::Disconnected).await;
                return false;
            }
        };

        match store.ping().await {
            Ok(()) => {
                info!("Connected to {target}");
                self.replace_state(ConnectionState::Connected(store)).await;
                true
            }
            Err(e) => {
                error!("Failed to connect to {target}: {e:#}");
                self.replace_state(ConnectionState::Disconnected).await;
                false
            }
        }
    }

    /// Release the store connection.
    pub async fn disconnect(&self) {
        if self.replace_state(ConnectionState::Disconnected).await {
            info!("Disconnected from {}", self.connector.describe());
        }
    }

    /// Swap in `next` and close the store it displaces, unless `next` holds
    /// that same store. Returns whether a store was closed.
    async fn replace_state(&self, next: ConnectionState) -> bool {
        let displaced = {
            let mut state = self.state.write().await;
            let previous = std::mem::replace(&mut *state, next);
            let displaced = match (previous, &*state) {
                (ConnectionState::Connected(previous), ConnectionState::Connected(current))
                    if Arc::ptr_eq(&previous, current) =>
                {
                    None
                }
                (ConnectionState::Connected(previous), _) => Some(previous),
                _ => None,
            };
            displaced
        };

        match displaced {
            Some(store) => {
                store.close().await;
                true
            }
            None => false,
        }
    }

    pub async fn status(&self) -> ConnectionStatus {
        match &*self.state.read().await {
            ConnectionState::Uninitialized => ConnectionStatus::Uninitialized,
            ConnectionState::Connected(_) => ConnectionStatus::Connected,
            ConnectionState::Disconnected => ConnectionStatus::Disconnected,
        }
    }

    /// Probe the store. Never fails; a failed probe marks the gateway
    /// disconnected.
    pub async fn is_connected(&self) -> bool {
        self.live_store().await.is_ok()
    }

    /// The connected store, verified by a probe.
    async fn live_store(&self) -> Result<Arc<dyn DocumentStore>, GatewayError> {
        let store = match &*self.state.read().await {
            ConnectionState::Connected(store) => Arc::clone(store),
            _ => return Err(GatewayError::NotConnected),
        };

        match store.ping().await {
            Ok(()) => Ok(store),
            Err(e) => {
                error!("Connection check failed: {e:#}");
                let mut state = self.state.write().await;
                // Another caller may have reconnected meanwhile.
                if matches!(&*state, ConnectionState::Connected(current) if Arc::ptr_eq(current, &store))
                {
                    *state = ConnectionState::Disconnected;
                }
                Err(GatewayError::NotConnected)
            }
        }
    }

    /// Insert a document and return its external identifier.
    ///
    /// The store assigns the identifier; an `_id` field in `document` is ignored.
    pub async fn insert(
        &self,
        collection: &str,
        mut document: Map<String, Value>,
    ) -> Result<String, GatewayError> {
        let store = self.live_store().await?;
        document.remove(ID_FIELD);
        let encoded = to_store_document(&document)?;

        let id = store.insert(collection, encoded).await?.to_hex();
        debug!("Inserted document {id} into collection {collection}");
        Ok(id)
    }

    /// Insert a typed entity into its own collection.
    pub async fn insert_entity(&self, entity: &Entity) -> Result<String, GatewayError> {
        self.insert(entity.collection().as_str(), entity.to_fields())
            .await
    }

    pub async fn count_documents(&self, collection: &str) -> Result<u64, GatewayError> {
        let store = self.live_store().await?;
        Ok(store.count(collection).await?)
    }

    /// List documents newest-first, each annotated with a display label.
    ///
    /// A `limit` of zero yields an empty listing.
    pub async fn list_documents(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ListedDocument>, GatewayError> {
        let store = self.live_store().await?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let documents = store.find_page(collection, skip, limit).await?;
        Ok(documents
            .into_iter()
            .map(|doc| ListedDocument::new(collection, StoredDocument::from_store(doc)))
            .collect())
    }

    /// One listing page together with the collection's total count.
    pub async fn list_page(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> Result<DocumentPage, GatewayError> {
        let total_count = self.count_documents(collection).await?;
        let documents = self.list_documents(collection, skip, limit).await?;

        Ok(DocumentPage {
            collection: collection.to_string(),
            total_count,
            skip,
            limit,
            count: documents.len(),
            documents,
        })
    }

    /// Look up one document. A malformed identifier finds nothing.
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, GatewayError> {
        let store = self.live_store().await?;
        let oid = match parse_external_id(id) {
            Ok(oid) => oid,
            Err(e) => {
                error!("{e}");
                return Ok(None);
            }
        };

        Ok(store
            .find_one(collection, oid)
            .await?
            .map(StoredDocument::from_store))
    }

    /// Apply a partial update. Returns `false` when no document matched.
    ///
    /// The identifier field is stripped from the patch. A patch with nothing
    /// left to apply writes nothing and reports whether the document exists.
    pub async fn update_document(
        &self,
        collection: &str,
        id: &str,
        patch: DocumentPatch,
    ) -> Result<bool, GatewayError> {
        let store = self.live_store().await?;
        let oid = parse_logged(id)?;

        let fields = patch.into_update_fields();
        let matched = if fields.is_empty() {
            store.find_one(collection, oid).await?.is_some()
        } else {
            store
                .update_fields(collection, oid, to_store_document(&fields)?)
                .await?
        };

        if matched {
            info!("Updated document {id} in collection {collection}");
        } else {
            warn!("Document {id} not found in collection {collection}");
        }
        Ok(matched)
    }

    /// Delete one document. Returns `false` when no document matched.
    pub async fn delete_document(&self, collection: &str, id: &str) -> Result<bool, GatewayError> {
        let store = self.live_store().await?;
        let oid = parse_logged(id)?;

        let deleted = store.delete_one(collection, oid).await?;
        if deleted {
            info!("Deleted document {id} from collection {collection}");
        } else {
            warn!("Document {id} not found in collection {collection}");
        }
        Ok(deleted)
    }

    /// Delete every document in a collection.
    pub async fn delete_all_documents(&self, collection: &str) -> Result<u64, GatewayError> {
        let store = self.live_store().await?;
        let deleted = store.delete_all(collection).await?;
        info!("Deleted {deleted} documents from collection {collection}");
        Ok(deleted)
    }

    /// Empty each of the given collections.
    pub async fn reset<S: AsRef<str>>(
        &self,
        collections: &[S],
    ) -> Result<ResetSummary, GatewayError> {
        let mut summary = ResetSummary::default();
        for collection in collections {
            let collection = collection.as_ref();
            let deleted = self.delete_all_documents(collection).await?;
            summary.deleted_counts.insert(collection.to_string(), deleted);
            summary.total_deleted += deleted;
        }

        info!(
            "Reset {} collections: deleted {} documents",
            summary.deleted_counts.len(),
            summary.total_deleted
        );
        Ok(summary)
    }
}

fn parse_logged(id: &str) -> Result<bson::oid::ObjectId, GatewayError> {
    parse_external_id(id).inspect_err(|e| error!("{e}"))
}
