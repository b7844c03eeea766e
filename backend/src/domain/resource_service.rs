//! Content resource service.
//!
//! One generic service implements the read and write driving ports for every
//! collection. Gallery events additionally get image list maintenance.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::domain::ports::{
    GalleryImagesCommand, ResourceCommand, ResourceQuery, ResourceRepository,
    ResourceRepositoryError,
};
use crate::domain::{
    Error, GalleryEvent, Payload, Record, RecordId, Resource, ValidationError, validate_create,
};

/// Message returned when an image endpoint receives no URL.
pub const IMAGE_URL_REQUIRED: &str = "Image URL is required";

pub(crate) fn map_validation_error(error: &ValidationError) -> Error {
    let details = match error {
        ValidationError::MissingRequired { fields, .. } => {
            json!({ "fields": fields, "code": error.code() })
        }
        other => match other.field() {
            Some(field) => json!({ "field": field, "code": other.code() }),
            None => json!({ "code": other.code() }),
        },
    };
    Error::invalid_request(error.to_string()).with_details(details)
}

fn map_repository_error<E: Resource>(error: ResourceRepositoryError) -> Error {
    match error {
        ResourceRepositoryError::Rejected { error } => map_validation_error(&error),
        ResourceRepositoryError::Connection { message } => {
            error!(collection = %E::KIND, %message, "resource store unavailable");
            Error::internal(format!("{} store unavailable: {message}", E::KIND))
                .with_details(json!({ "reason": "store_unavailable" }))
        }
        ResourceRepositoryError::Query { message } => {
            error!(collection = %E::KIND, %message, "resource store query failed");
            Error::internal(format!("{} store error: {message}", E::KIND))
                .with_details(json!({ "reason": "store_query_failed" }))
        }
    }
}

fn not_found<E: Resource>() -> Error {
    Error::not_found(E::KIND.not_found_message())
}

/// Resource service implementing the content driving ports over one
/// repository.
pub struct ResourceService<E: Resource> {
    repo: Arc<dyn ResourceRepository<E>>,
}

impl<E: Resource> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Resource> ResourceService<E> {
    /// Create a service backed by the given repository.
    pub fn new(repo: Arc<dyn ResourceRepository<E>>) -> Self {
        Self { repo }
    }

    async fn fetch(&self, id: &RecordId) -> Result<Record<E>, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error::<E>)?
            .ok_or_else(not_found::<E>)
    }

    async fn merge(&self, id: &RecordId, payload: Payload) -> Result<Record<E>, Error> {
        let record = self
            .repo
            .update(id, payload)
            .await
            .map_err(map_repository_error::<E>)?
            .ok_or_else(not_found::<E>)?;
        debug!(collection = %E::KIND, id = %record.id(), "record updated");
        Ok(record)
    }
}

#[async_trait]
impl<E: Resource> ResourceQuery<E> for ResourceService<E> {
    async fn list(&self) -> Result<Vec<Record<E>>, Error> {
        let mut records = self
            .repo
            .find_all()
            .await
            .map_err(map_repository_error::<E>)?;
        E::order_for_listing(&mut records);
        Ok(records)
    }

    async fn get(&self, id: &RecordId) -> Result<Record<E>, Error> {
        self.fetch(id).await
    }
}

#[async_trait]
impl<E: Resource> ResourceCommand<E> for ResourceService<E> {
    async fn create(&self, payload: Payload) -> Result<Record<E>, Error> {
        let body = validate_create::<E>(&payload).map_err(|err| map_validation_error(&err))?;
        let record = self
            .repo
            .create(body)
            .await
            .map_err(map_repository_error::<E>)?;
        debug!(collection = %E::KIND, id = %record.id(), "record created");
        Ok(record)
    }

    async fn update(&self, id: &RecordId, payload: Payload) -> Result<Record<E>, Error> {
        self.merge(id, payload).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), Error> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(map_repository_error::<E>)?;
        if !removed {
            return Err(not_found::<E>());
        }
        debug!(collection = %E::KIND, %id, "record deleted");
        Ok(())
    }
}

fn require_image_url(image_url: Option<String>) -> Result<String, Error> {
    image_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            Error::invalid_request(IMAGE_URL_REQUIRED)
                .with_details(json!({ "field": "imageUrl", "code": "missing_field" }))
        })
}

fn images_patch(images: Vec<String>) -> Payload {
    let mut patch = Payload::new();
    patch.insert(
        "images".to_owned(),
        Value::Array(images.into_iter().map(Value::String).collect()),
    );
    patch
}

#[async_trait]
impl GalleryImagesCommand for ResourceService<GalleryEvent> {
    async fn add_image(
        &self,
        id: &RecordId,
        image_url: Option<String>,
    ) -> Result<Record<GalleryEvent>, Error> {
        let event = self.fetch(id).await?;
        let url = require_image_url(image_url)?;
        let images = event.body().images_with(&url);
        self.merge(id, images_patch(images)).await
    }

    async fn remove_image(
        &self,
        id: &RecordId,
        image_url: Option<String>,
    ) -> Result<Record<GalleryEvent>, Error> {
        let event = self.fetch(id).await?;
        let url = require_image_url(image_url)?;
        let images = event.body().images_without(&url);
        self.merge(id, images_patch(images)).await
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
