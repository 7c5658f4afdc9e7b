use db::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// A collection this seeder draws foreign keys from has nothing to draw.
    #[error("missing prerequisite data: no {what} found in `{collection}`, seed them first")]
    MissingPrerequisite {
        collection: &'static str,
        what: &'static str,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SeedError {
    pub fn missing(collection: &'static str, what: &'static str) -> Self {
        SeedError::MissingPrerequisite { collection, what }
    }
}

/// Fails with [`SeedError::MissingPrerequisite`] when `items` is empty.
pub fn require<T>(items: &[T], collection: &'static str, what: &'static str) -> Result<(), SeedError> {
    if items.is_empty() {
        Err(SeedError::missing(collection, what))
    } else {
        Ok(())
    }
}
