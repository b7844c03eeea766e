//! Builders wiring each collection to its document store.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use site_backend::domain::ports::ResourceRepository;
use site_backend::domain::{BlogPost, Branch, GalleryEvent, Offer, Resource, User};
use site_backend::inbound::http::state::{HttpState, HttpStateRepositories};
use site_backend::outbound::memory::InMemoryResourceRepository;
use site_backend::outbound::persistence::{DbPool, DieselDocumentRepository};

use super::{ContentStore, ServerConfig};

/// Repository for one collection: PostgreSQL when a pool is configured,
/// process memory otherwise.
fn build_repository<E: Resource>(
    pool: Option<&DbPool>,
    clock: &Arc<dyn Clock>,
) -> Arc<dyn ResourceRepository<E>> {
    match pool {
        Some(pool) => Arc::new(DieselDocumentRepository::<E>::new(
            pool.clone(),
            Arc::clone(clock),
        )),
        None => Arc::new(InMemoryResourceRepository::<E>::new(Arc::clone(clock))),
    }
}

/// Build the HTTP state for every content collection.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let pool = match &config.store {
        ContentStore::Postgres(pool) => Some(pool),
        ContentStore::InMemory => None,
    };
    match pool {
        Some(_) => info!(store = %config.store, "serving content from PostgreSQL"),
        None => warn!(
            store = %config.store,
            "no database configured; content is kept in memory and lost on restart"
        ),
    }

    HttpState::new(HttpStateRepositories {
        gallery: build_repository::<GalleryEvent>(pool, &clock),
        blogs: build_repository::<BlogPost>(pool, &clock),
        branches: build_repository::<Branch>(pool, &clock),
        offers: build_repository::<Offer>(pool, &clock),
        users: build_repository::<User>(pool, &clock),
    })
}
