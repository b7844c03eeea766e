//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL document store using Diesel ORM
//! - **memory**: process-local document store for development and tests
//!
//! Adapters are thin translators between domain records and storage. Field
//! rules come from the domain; adapters only add identifiers, timestamps and
//! uniqueness.

pub mod memory;
pub mod persistence;
