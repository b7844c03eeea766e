//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The wrappers mirror the JSON shape of their domain counterparts (request
//! bodies carry the content fields; responses add `id`, `createdAt` and
//! `updatedAt`).

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested record or route does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Failure envelope returned with every 4xx and 5xx response.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message; opaque for internal errors.
    #[schema(example = "Title and cover image are required")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured validation detail such as the offending field.
    details: Option<serde_json::Value>,
}

/// Success envelope; `data` holds a record or a list of records.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SuccessEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// Record, list of records, or absent for deletions.
    data: Option<serde_json::Value>,
    /// Confirmation message for mutations.
    #[schema(example = "Gallery event created successfully")]
    message: Option<String>,
}

/// Body of the gallery image endpoints.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ImageRequestSchema {
    #[schema(example = "https://cdn.example.com/gallery/a.jpg")]
    image_url: String,
}

/// OpenAPI schema for [`crate::domain::GalleryEvent`].
#[derive(ToSchema)]
#[schema(as = crate::domain::GalleryEvent, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GalleryEventSchema {
    #[schema(example = "Open Day")]
    title: String,
    #[schema(example = "https://cdn.example.com/gallery/cover.jpg")]
    cover_image: String,
    description: Option<String>,
    images: Vec<String>,
    #[schema(format = Date, example = "2025-03-14")]
    event_date: Option<String>,
    location: Option<String>,
}

/// OpenAPI schema for [`crate::domain::BlogStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BlogStatus)]
pub enum BlogStatusSchema {
    Draft,
    Published,
    Archived,
}

/// OpenAPI schema for [`crate::domain::BlogPost`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BlogPost, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogPostSchema {
    title: String,
    /// Lowercase ASCII letters, digits and single hyphens; unique.
    #[schema(example = "study-in-australia")]
    slug: String,
    excerpt: String,
    content: String,
    author: String,
    category: String,
    cover_image: Option<String>,
    tags: Vec<String>,
    status: Option<BlogStatusSchema>,
    featured: Option<bool>,
    #[schema(minimum = 0)]
    read_time: Option<u32>,
}

/// OpenAPI schema for [`crate::domain::Branch`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Branch, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BranchSchema {
    #[schema(example = "Kathmandu")]
    name: String,
    address: String,
    city: String,
    phone: Option<String>,
    #[schema(format = Email)]
    email: Option<String>,
    map_url: Option<String>,
    image: Option<String>,
    opening_hours: Option<String>,
    is_head_office: Option<bool>,
}

/// OpenAPI schema for [`crate::domain::OfferCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OfferCategory)]
pub enum OfferCategorySchema {
    #[schema(rename = "scholarship")]
    Scholarship,
    #[schema(rename = "discount")]
    Discount,
    #[schema(rename = "test-preparation")]
    TestPreparation,
    #[schema(rename = "visa-assistance")]
    VisaAssistance,
    #[schema(rename = "accommodation")]
    Accommodation,
    #[schema(rename = "other")]
    Other,
}

/// OpenAPI schema for [`crate::domain::OfferStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OfferStatus)]
pub enum OfferStatusSchema {
    #[schema(rename = "current")]
    Current,
    #[schema(rename = "upcoming")]
    Upcoming,
    #[schema(rename = "expired")]
    Expired,
}

/// OpenAPI schema for [`crate::domain::Offer`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Offer, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OfferSchema {
    title: String,
    description: String,
    category: OfferCategorySchema,
    status: Option<OfferStatusSchema>,
    terms: Vec<String>,
    image: Option<String>,
    #[schema(example = "20%")]
    discount: Option<String>,
    #[schema(format = Date)]
    valid_from: Option<String>,
    /// Must not be earlier than `validFrom`.
    #[schema(format = Date)]
    valid_until: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UserRole`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserRole)]
pub enum UserRoleSchema {
    #[schema(rename = "admin")]
    Admin,
    #[schema(rename = "editor")]
    Editor,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// `role` is fixed at creation and rejected on update when it differs.
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "Asha Shrestha")]
    name: String,
    /// Unique, compared case-insensitively.
    #[schema(format = Email)]
    email: String,
    role: Option<UserRoleSchema>,
    phone: Option<String>,
    avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn entity_schemas_use_domain_names() {
        // utoipa replaces :: with . in schema names
        assert_eq!(GalleryEventSchema::name(), "crate.domain.GalleryEvent");
        assert_eq!(BlogPostSchema::name(), "crate.domain.BlogPost");
        assert_eq!(UserSchema::name(), "crate.domain.User");
    }

    #[rstest]
    fn field_names_are_camel_case() {
        let gallery = schema_to_json::<GalleryEventSchema>();
        assert!(gallery.contains("coverImage"));
        assert!(gallery.contains("eventDate"));

        let failure = schema_to_json::<FailureEnvelopeSchema>();
        assert!(failure.contains("traceId"));
    }

    #[rstest]
    fn offer_category_schema_uses_kebab_case() {
        let schema_json = schema_to_json::<OfferCategorySchema>();
        assert!(schema_json.contains("test-preparation"));
        assert!(schema_json.contains("visa-assistance"));
    }
}
