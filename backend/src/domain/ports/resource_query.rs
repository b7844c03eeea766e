//! Driving port for content reads.

use async_trait::async_trait;

use crate::domain::{Error, Record, RecordId, Resource};

/// Read operations over one content collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceQuery<E: Resource>: Send + Sync {
    /// All records, in the collection's listing order.
    async fn list(&self) -> Result<Vec<Record<E>>, Error>;

    /// A single record; `ErrorCode::NotFound` when absent.
    async fn get(&self, id: &RecordId) -> Result<Record<E>, Error>;
}
