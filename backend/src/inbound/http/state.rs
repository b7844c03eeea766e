//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    GalleryImagesCommand, ResourceCommand, ResourceQuery, ResourceRepository,
};
use crate::domain::{BlogPost, Branch, GalleryEvent, Offer, Resource, ResourceService, User};

/// Read and write ports for one collection.
pub struct ResourcePorts<E: Resource> {
    pub query: Arc<dyn ResourceQuery<E>>,
    pub command: Arc<dyn ResourceCommand<E>>,
}

impl<E: Resource> Clone for ResourcePorts<E> {
    fn clone(&self) -> Self {
        Self {
            query: Arc::clone(&self.query),
            command: Arc::clone(&self.command),
        }
    }
}

impl<E: Resource> ResourcePorts<E> {
    /// Serve both ports from one service instance.
    pub fn from_service(service: ResourceService<E>) -> Self {
        let service = Arc::new(service);
        Self {
            query: service.clone(),
            command: service,
        }
    }

    /// Build the service over `repo` and serve both ports from it.
    pub fn from_repository(repo: Arc<dyn ResourceRepository<E>>) -> Self {
        Self::from_service(ResourceService::new(repo))
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub gallery: ResourcePorts<GalleryEvent>,
    pub gallery_images: Arc<dyn GalleryImagesCommand>,
    pub blogs: ResourcePorts<BlogPost>,
    pub branches: ResourcePorts<Branch>,
    pub offers: ResourcePorts<Offer>,
    pub users: ResourcePorts<User>,
}

/// Repositories for every collection, one per entity type.
#[derive(Clone)]
pub struct HttpStateRepositories {
    pub gallery: Arc<dyn ResourceRepository<GalleryEvent>>,
    pub blogs: Arc<dyn ResourceRepository<BlogPost>>,
    pub branches: Arc<dyn ResourceRepository<Branch>>,
    pub offers: Arc<dyn ResourceRepository<Offer>>,
    pub users: Arc<dyn ResourceRepository<User>>,
}

impl From<HttpStateRepositories> for HttpState {
    fn from(repos: HttpStateRepositories) -> Self {
        Self::new(repos)
    }
}

impl HttpState {
    /// Wire a [`ResourceService`] over each repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use site_backend::domain::{BlogPost, Branch, GalleryEvent, Offer, User};
    /// use site_backend::inbound::http::state::{HttpState, HttpStateRepositories};
    /// use site_backend::outbound::memory::InMemoryResourceRepository;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let state = HttpState::new(HttpStateRepositories {
    ///     gallery: Arc::new(InMemoryResourceRepository::<GalleryEvent>::new(clock.clone())),
    ///     blogs: Arc::new(InMemoryResourceRepository::<BlogPost>::new(clock.clone())),
    ///     branches: Arc::new(InMemoryResourceRepository::<Branch>::new(clock.clone())),
    ///     offers: Arc::new(InMemoryResourceRepository::<Offer>::new(clock.clone())),
    ///     users: Arc::new(InMemoryResourceRepository::<User>::new(clock)),
    /// });
    /// let _gallery = state.gallery.query.clone();
    /// ```
    pub fn new(repos: HttpStateRepositories) -> Self {
        let HttpStateRepositories {
            gallery,
            blogs,
            branches,
            offers,
            users,
        } = repos;
        let gallery_service = Arc::new(ResourceService::new(gallery));
        Self {
            gallery: ResourcePorts {
                query: gallery_service.clone(),
                command: gallery_service.clone(),
            },
            gallery_images: gallery_service,
            blogs: ResourcePorts::from_repository(blogs),
            branches: ResourcePorts::from_repository(branches),
            offers: ResourcePorts::from_repository(offers),
            users: ResourcePorts::from_repository(users),
        }
    }
}

/// Selects the ports serving a collection from [`HttpState`].
pub trait HttpResource: Resource {
    fn ports(state: &HttpState) -> &ResourcePorts<Self>;
}

impl HttpResource for GalleryEvent {
    fn ports(state: &HttpState) -> &ResourcePorts<Self> {
        &state.gallery
    }
}

impl HttpResource for BlogPost {
    fn ports(state: &HttpState) -> &ResourcePorts<Self> {
        &state.blogs
    }
}

impl HttpResource for Branch {
    fn ports(state: &HttpState) -> &ResourcePorts<Self> {
        &state.branches
    }
}

impl HttpResource for Offer {
    fn ports(state: &HttpState) -> &ResourcePorts<Self> {
        &state.offers
    }
}

impl HttpResource for User {
    fn ports(state: &HttpState) -> &ResourcePorts<Self> {
        &state.users
    }
}
