use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::error::StoreError;
use crate::store::DocumentStore;

/// In-process document store for tests.
///
/// Filters support top-level equality only, which is all the seeders use.
/// Every successful `insert_many` call is journaled so tests can assert that
/// a failed seeder never wrote anything.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    writes: Mutex<Vec<(String, usize)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .expect("memory store poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }

    /// `(collection, batch size)` for every bulk insert performed so far.
    pub fn writes(&self) -> Vec<(String, usize)> {
        self.writes.lock().expect("memory store poisoned").clone()
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key).unwrap_or(&Bson::Null) == expected)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock().expect("memory store poisoned");
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError> {
        let mut ids = Vec::with_capacity(docs.len());
        let mut stored = Vec::with_capacity(docs.len());

        for mut doc in docs {
            let id = match doc.get("_id") {
                Some(Bson::ObjectId(id)) => *id,
                Some(_) => return Err(StoreError::MissingInsertedId(collection.to_string())),
                None => {
                    let id = ObjectId::new();
                    doc.insert("_id", id);
                    id
                }
            };
            ids.push(id);
            stored.push(doc);
        }

        self.writes
            .lock()
            .expect("memory store poisoned")
            .push((collection.to_string(), stored.len()));
        self.collections
            .lock()
            .expect("memory store poisoned")
            .entry(collection.to_string())
            .or_default()
            .extend(stored);

        Ok(ids)
    }
}
