//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. The partial unique
//! indexes on `body` are not visible to Diesel; see the migration for them.

diesel::table! {
    /// Content documents for every collection.
    ///
    /// Each row stores one record body as JSONB, tagged with its collection.
    documents (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Collection name such as `gallery` or `blogs`.
        collection -> Varchar,
        /// camelCase JSON document body.
        body -> Jsonb,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
