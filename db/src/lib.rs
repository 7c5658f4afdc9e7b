pub mod error;
pub mod lookup;
pub mod models;
pub mod repository;
pub mod store;
pub mod test_utils;

pub use error::StoreError;
pub use mongodb::bson;
pub use repository::Collection;
pub use store::{DocumentStore, MongoStore};

/// Opens a client against `url` and selects `database`.
pub async fn connect(url: &str, database: &str) -> Result<MongoStore, StoreError> {
    MongoStore::connect(url, database).await
}
