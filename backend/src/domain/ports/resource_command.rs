//! Driving ports for content mutations.

use async_trait::async_trait;

use crate::domain::{Error, GalleryEvent, Payload, Record, RecordId, Resource};

/// Create, update and delete operations over one content collection.
///
/// Validation failures surface as `ErrorCode::InvalidRequest`, unknown
/// identifiers as `ErrorCode::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceCommand<E: Resource>: Send + Sync {
    /// Validate a payload and store it as a new record.
    async fn create(&self, payload: Payload) -> Result<Record<E>, Error>;

    /// Merge a partial payload into an existing record.
    async fn update(&self, id: &RecordId, payload: Payload) -> Result<Record<E>, Error>;

    /// Remove a record.
    async fn delete(&self, id: &RecordId) -> Result<(), Error>;
}

/// Image list maintenance for gallery events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalleryImagesCommand: Send + Sync {
    /// Append an image URL to the event.
    async fn add_image(
        &self,
        id: &RecordId,
        image_url: Option<String>,
    ) -> Result<Record<GalleryEvent>, Error>;

    /// Remove every occurrence of an image URL from the event.
    async fn remove_image(
        &self,
        id: &RecordId,
        image_url: Option<String>,
    ) -> Result<Record<GalleryEvent>, Error>;
}
