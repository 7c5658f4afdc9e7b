//! Storage boundary for the seeder.
//!
//! Seeders only ever read whole collections (optionally narrowed by a
//! top-level equality filter) and write batches, so the seam is two calls
//! over raw BSON documents. `MongoStore` talks to a live server;
//! `test_utils::MemoryStore` keeps everything in process.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use mongodb::{Client, Database};

use crate::error::StoreError;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document in `collection` matching `filter`.
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Writes `docs` in a single bulk insert and returns their `_id`s in input order.
    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError>;
}

pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(database);
        log::info!("Connected to MongoDB database `{}`", database);
        Ok(Self { client, db })
    }

    /// Closes the connection pool. Consumes the store.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.db.collection::<Document>(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError> {
        let total = docs.len();
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(docs)
            .await?;

        (0..total)
            .map(|index| match result.inserted_ids.get(&index) {
                Some(Bson::ObjectId(id)) => Ok(*id),
                _ => Err(StoreError::MissingInsertedId(collection.to_string())),
            })
            .collect()
    }
}
