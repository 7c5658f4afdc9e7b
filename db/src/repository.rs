use mongodb::bson::{self, oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;
use crate::lookup::Projection;
use crate::store::DocumentStore;

/// A typed document living in a named collection.
pub trait Collection: Serialize + DeserializeOwned + Send + Sync {
    const NAME: &'static str;
}

/// `_id` of every document in `collection` matching `filter`. Nothing else is decoded.
pub async fn find_ids(
    store: &dyn DocumentStore,
    collection: &str,
    filter: Document,
) -> Result<Vec<ObjectId>, StoreError> {
    Ok(store
        .find(collection, filter)
        .await?
        .iter()
        .filter_map(|doc| doc.get_object_id("_id").ok())
        .collect())
}

/// Snapshot of `T::COLLECTION` projected onto `T`.
///
/// Documents lacking the projected fields are left out of the snapshot.
pub async fn find_projected<T: Projection>(
    store: &dyn DocumentStore,
    filter: Document,
) -> Result<Vec<T>, StoreError> {
    let docs = store.find(T::COLLECTION, filter).await?;
    let total = docs.len();
    let records: Vec<T> = docs
        .into_iter()
        .filter_map(|doc| bson::from_document(doc).ok())
        .collect();

    if records.len() < total {
        log::debug!(
            "Left {} of {} `{}` documents out of the snapshot",
            total - records.len(),
            total,
            T::COLLECTION
        );
    }
    Ok(records)
}

/// Bulk-inserts `records`. An empty slice performs no write.
pub async fn insert_many<T: Collection>(
    store: &dyn DocumentStore,
    records: &[T],
) -> Result<Vec<ObjectId>, StoreError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let docs = records
        .iter()
        .map(|record| {
            bson::to_document(record).map_err(|source| StoreError::Encode {
                collection: T::NAME,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    store.insert_many(T::NAME, docs).await
}
