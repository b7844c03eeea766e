//! Content API for the consultancy website.
//!
//! Hexagonal layout: [`domain`] holds entities, validation and the resource
//! service; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the document store for PostgreSQL and for process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::AppSettings;
