//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod resource_command;
mod resource_query;
mod resource_repository;

#[cfg(test)]
pub use resource_command::{MockGalleryImagesCommand, MockResourceCommand};
pub use resource_command::{GalleryImagesCommand, ResourceCommand};
#[cfg(test)]
pub use resource_query::MockResourceQuery;
pub use resource_query::ResourceQuery;
#[cfg(test)]
pub use resource_repository::MockResourceRepository;
pub use resource_repository::{ResourceRepository, ResourceRepositoryError};
