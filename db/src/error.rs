use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to encode `{collection}` document: {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: bson::ser::Error,
    },

    #[error("insert into `{0}` did not return an ObjectId for every document")]
    MissingInsertedId(String),
}
