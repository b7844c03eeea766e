//! Domain primitives, content entities and services.
//!
//! Purpose: define the content model served by the site API independently of
//! HTTP and storage. Types document their serialisation contracts (serde) in
//! their Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Record / RecordId / Payload: store envelope and client input.
//! - Resource / ResourceKind: per-collection behaviour.
//! - GalleryEvent, BlogPost, Branch, Offer, User: content entities.
//! - validate_create / apply_patch: pure payload validation.
//! - ResourceService: driving port implementation.

pub mod content;
pub mod error;
pub mod ports;
pub mod record;
pub mod resource;
pub mod resource_service;
mod slug;
pub mod trace_id;
pub mod validation;

pub use self::content::{
    BlogPost, BlogStatus, Branch, GalleryEvent, Offer, OfferCategory, OfferStatus, User, UserRole,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::record::{CalendarDate, Payload, Record, RecordId, RecordIdParseError};
pub use self::resource::{Resource, ResourceKind, UniqueKey, apply_patch, validate_create};
pub use self::resource_service::{IMAGE_URL_REQUIRED, ResourceService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::ValidationError;
