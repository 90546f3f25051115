//! MongoDB-backed document store.

use crate::store::{DocumentStore, StoreConnector};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::sync::Arc;
use std::time::Duration;

/// MongoDB connection options (library type without clap).
#[derive(Clone, Debug)]
pub struct MongoOpts {
    /// Connection string, e.g. `mongodb://localhost:27017`
    pub uri: String,
    pub database: String,
}

/// Connector producing [`MongoStore`] handles.
#[derive(Clone, Debug)]
pub struct MongoConnector {
    opts: MongoOpts,
}

impl MongoConnector {
    pub fn new(opts: MongoOpts) -> Self {
        Self { opts }
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>> {
        tracing::debug!("Parsing MongoDB connection options");
        let mut options = ClientOptions::parse(&self.opts.uri).await?;
        // Add connection timeout to prevent hanging
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));

        let client = Client::with_options(options)?;
        let database = client.database(&self.opts.database);
        tracing::debug!("MongoDB client created for database {}", self.opts.database);

        Ok(Arc::new(MongoStore::new(client, database)))
    }

    fn describe(&self) -> String {
        format!("MongoDB database {}", self.opts.database)
    }
}

/// Document store over one MongoDB database.
///
/// The driver pools connections internally; one store is shared by all
/// callers of the gateway.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    pub fn new(client: Client, database: Database) -> Self {
        Self { client, database }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId> {
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("store assigned a non-ObjectId identifier: {}", result.inserted_id))
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }

    async fn find_page(&self, collection: &str, skip: u64, limit: u64) -> Result<Vec<Document>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .skip(skip)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one(doc! { "_id": id })
            .await?)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<bool> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self, collection: &str) -> Result<u64> {
        let result = self.collection(collection).delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}
