//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Content records live in one JSONB `documents` table, partitioned by
//! collection name. Queries run on `diesel-async` connections from a `bb8`
//! pool; schema migrations are embedded and applied at startup.
//!
//! # Example
//!
//! ```ignore
//! use site_backend::outbound::persistence::{DbPool, DieselDocumentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/site")).await?;
//! let blogs = DieselDocumentRepository::<BlogPost>::new(pool, Arc::new(DefaultClock));
//! ```

mod diesel_basic_error_mapping;
mod diesel_document_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_repository::DieselDocumentRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
