//! Driven port for content persistence.
//!
//! One repository instance serves one collection. Adapters generate record
//! identifiers and timestamps, enforce per-collection uniqueness and merge
//! partial updates through [`apply_patch`](crate::domain::apply_patch).

use async_trait::async_trait;

use crate::domain::{Payload, Record, RecordId, Resource, ValidationError};

use super::define_port_error;

define_port_error! {
    /// Errors raised by resource repository adapters.
    pub enum ResourceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "resource repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "resource repository query failed: {message}",
        /// The store refused the document.
        Rejected { error: ValidationError } =>
            "resource repository rejected the document: {error}",
    }
}

/// Port for reading and writing records of one collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository<E: Resource>: Send + Sync {
    /// Every record in the collection, in store order.
    async fn find_all(&self) -> Result<Vec<Record<E>>, ResourceRepositoryError>;

    /// Look up a record by identifier.
    async fn find_by_id(&self, id: &RecordId)
    -> Result<Option<Record<E>>, ResourceRepositoryError>;

    /// Store a new body under a fresh identifier.
    async fn create(&self, body: E) -> Result<Record<E>, ResourceRepositoryError>;

    /// Merge `patch` into the stored body and refresh `updatedAt`.
    ///
    /// Returns `Ok(None)` when no record has the identifier.
    async fn update(
        &self,
        id: &RecordId,
        patch: Payload,
    ) -> Result<Option<Record<E>>, ResourceRepositoryError>;

    /// Remove a record. Returns `true` when something was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, ResourceRepositoryError>;
}
