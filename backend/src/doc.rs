//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every content endpoint, the gallery image endpoints,
//! the health probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    BlogPostSchema, BlogStatusSchema, BranchSchema, ErrorCodeSchema, FailureEnvelopeSchema,
    GalleryEventSchema, ImageRequestSchema, OfferCategorySchema, OfferSchema, OfferStatusSchema,
    SuccessEnvelopeSchema, UserRoleSchema, UserSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Site content API",
        description = "CRUD endpoints for gallery events, blog posts, branches, offers and users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::resources::list_gallery,
        crate::inbound::http::resources::get_gallery,
        crate::inbound::http::resources::create_gallery,
        crate::inbound::http::resources::update_gallery,
        crate::inbound::http::resources::delete_gallery,
        crate::inbound::http::resources::add_gallery_image,
        crate::inbound::http::resources::remove_gallery_image,
        crate::inbound::http::resources::list_blog,
        crate::inbound::http::resources::get_blog,
        crate::inbound::http::resources::create_blog,
        crate::inbound::http::resources::update_blog,
        crate::inbound::http::resources::delete_blog,
        crate::inbound::http::resources::list_branch,
        crate::inbound::http::resources::get_branch,
        crate::inbound::http::resources::create_branch,
        crate::inbound::http::resources::update_branch,
        crate::inbound::http::resources::delete_branch,
        crate::inbound::http::resources::list_offer,
        crate::inbound::http::resources::get_offer,
        crate::inbound::http::resources::create_offer,
        crate::inbound::http::resources::update_offer,
        crate::inbound::http::resources::delete_offer,
        crate::inbound::http::resources::list_user,
        crate::inbound::http::resources::get_user,
        crate::inbound::http::resources::create_user,
        crate::inbound::http::resources::update_user,
        crate::inbound::http::resources::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        FailureEnvelopeSchema,
        SuccessEnvelopeSchema,
        ImageRequestSchema,
        GalleryEventSchema,
        BlogStatusSchema,
        BlogPostSchema,
        BranchSchema,
        OfferCategorySchema,
        OfferStatusSchema,
        OfferSchema,
        UserRoleSchema,
        UserSchema,
    )),
    tags(
        (name = "gallery", description = "Gallery events and their images"),
        (name = "blogs", description = "Blog posts"),
        (name = "branches", description = "Office branches"),
        (name = "offers", description = "Promotional offers"),
        (name = "users", description = "Staff accounts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const GALLERY_SCHEMA_NAME: &str = "crate.domain.GalleryEvent";

    #[rstest]
    #[case("/api/v1/gallery")]
    #[case("/api/v1/gallery/{id}")]
    #[case("/api/v1/gallery/{id}/images")]
    #[case("/api/v1/blogs/{id}")]
    #[case("/api/v1/branches")]
    #[case("/api/v1/offers/{id}")]
    #[case("/api/v1/users")]
    #[case("/health/ready")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn gallery_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let gallery = schemas.get(GALLERY_SCHEMA_NAME).expect("GalleryEvent schema");

        match gallery {
            RefOr::T(Schema::Object(obj)) => {
                assert!(obj.properties.contains_key("title"));
                assert!(obj.properties.contains_key("coverImage"));
                assert!(obj.required.contains(&"title".to_owned()));
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("document serialises");
        assert!(json.contains("Site content API"));
    }
}
