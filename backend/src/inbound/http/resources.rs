//! Content CRUD handlers.
//!
//! ```text
//! GET    /api/v1/{collection}
//! GET    /api/v1/{collection}/{id}
//! POST   /api/v1/{collection}
//! PUT    /api/v1/{collection}/{id}
//! DELETE /api/v1/{collection}/{id}
//! POST   /api/v1/gallery/{id}/images
//! DELETE /api/v1/gallery/{id}/images
//! ```
//!
//! The five verbs share one generic implementation per operation; the
//! `content_endpoints!` macro stamps out the routed, documented wrappers for
//! each collection.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, post, web};
use serde::Deserialize;

use crate::domain::{
    BlogPost, Branch, Error, GalleryEvent, Offer, Payload, RecordId, Resource, User,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    BlogPostSchema, BranchSchema, FailureEnvelopeSchema, GalleryEventSchema, ImageRequestSchema,
    OfferSchema, SuccessEnvelopeSchema, UserSchema,
};
use crate::inbound::http::state::{HttpResource, HttpState};

/// Malformed identifiers cannot name a stored record, so they read as absent.
fn parse_record_id<E: Resource>(raw: &str) -> Result<RecordId, Error> {
    raw.parse()
        .map_err(|_| Error::not_found(E::KIND.not_found_message()))
}

async fn list_records<E: HttpResource>(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let records = E::ports(&state).query.list().await?;
    Ok(Envelope::data(records).respond(StatusCode::OK))
}

async fn get_record<E: HttpResource>(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id::<E>(&id)?;
    let record = E::ports(&state).query.get(&id).await?;
    Ok(Envelope::data(record).respond(StatusCode::OK))
}

async fn create_record<E: HttpResource>(
    state: web::Data<HttpState>,
    payload: web::Json<Payload>,
) -> ApiResult<HttpResponse> {
    let record = E::ports(&state)
        .command
        .create(payload.into_inner())
        .await?;
    Ok(Envelope::data(record)
        .with_message(format!("{} created successfully", E::KIND.label()))
        .respond(StatusCode::CREATED))
}

async fn update_record<E: HttpResource>(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<Payload>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id::<E>(&id)?;
    let record = E::ports(&state)
        .command
        .update(&id, payload.into_inner())
        .await?;
    Ok(Envelope::data(record)
        .with_message(format!("{} updated successfully", E::KIND.label()))
        .respond(StatusCode::OK))
}

async fn delete_record<E: HttpResource>(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id::<E>(&id)?;
    E::ports(&state).command.delete(&id).await?;
    Ok(Envelope::message(format!("{} deleted successfully", E::KIND.label()))
        .respond(StatusCode::OK))
}

macro_rules! content_endpoints {
    (
        $entity:ty,
        name = $name:ident,
        tag = $tag:tt,
        schema = $schema:ty,
        collection = ($collection:tt, $collection_doc:tt),
        item = ($item:tt, $item_doc:tt) $(,)?
    ) => {
        ::paste::paste! {
            /// List every record in the collection.
            #[utoipa::path(
                get,
                path = $collection_doc,
                responses(
                    (status = 200, description = "All records", body = SuccessEnvelopeSchema),
                    (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
                ),
                tags = [$tag]
            )]
            #[actix_web::get($collection)]
            pub async fn [<list_ $name>](state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
                list_records::<$entity>(state).await
            }

            /// Fetch one record by identifier.
            #[utoipa::path(
                get,
                path = $item_doc,
                params(("id" = String, Path, description = "Record identifier")),
                responses(
                    (status = 200, description = "The record", body = SuccessEnvelopeSchema),
                    (status = 404, description = "Not found", body = FailureEnvelopeSchema),
                    (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
                ),
                tags = [$tag]
            )]
            #[actix_web::get($item)]
            pub async fn [<get_ $name>](
                state: web::Data<HttpState>,
                id: web::Path<String>,
            ) -> ApiResult<HttpResponse> {
                get_record::<$entity>(state, id).await
            }

            /// Validate and store a new record.
            #[utoipa::path(
                post,
                path = $collection_doc,
                request_body = $schema,
                responses(
                    (status = 201, description = "Created record", body = SuccessEnvelopeSchema),
                    (status = 400, description = "Invalid request", body = FailureEnvelopeSchema),
                    (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
                ),
                tags = [$tag]
            )]
            #[actix_web::post($collection)]
            pub async fn [<create_ $name>](
                state: web::Data<HttpState>,
                payload: web::Json<Payload>,
            ) -> ApiResult<HttpResponse> {
                create_record::<$entity>(state, payload).await
            }

            /// Merge a partial payload into a record.
            #[utoipa::path(
                put,
                path = $item_doc,
                params(("id" = String, Path, description = "Record identifier")),
                request_body = $schema,
                responses(
                    (status = 200, description = "Updated record", body = SuccessEnvelopeSchema),
                    (status = 400, description = "Invalid request", body = FailureEnvelopeSchema),
                    (status = 404, description = "Not found", body = FailureEnvelopeSchema),
                    (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
                ),
                tags = [$tag]
            )]
            #[actix_web::put($item)]
            pub async fn [<update_ $name>](
                state: web::Data<HttpState>,
                id: web::Path<String>,
                payload: web::Json<Payload>,
            ) -> ApiResult<HttpResponse> {
                update_record::<$entity>(state, id, payload).await
            }

            /// Remove a record.
            #[utoipa::path(
                delete,
                path = $item_doc,
                params(("id" = String, Path, description = "Record identifier")),
                responses(
                    (status = 200, description = "Deletion acknowledged", body = SuccessEnvelopeSchema),
                    (status = 404, description = "Not found", body = FailureEnvelopeSchema),
                    (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
                ),
                tags = [$tag]
            )]
            #[actix_web::delete($item)]
            pub async fn [<delete_ $name>](
                state: web::Data<HttpState>,
                id: web::Path<String>,
            ) -> ApiResult<HttpResponse> {
                delete_record::<$entity>(state, id).await
            }
        }
    };
}

content_endpoints!(
    GalleryEvent,
    name = gallery,
    tag = "gallery",
    schema = GalleryEventSchema,
    collection = ("/gallery", "/api/v1/gallery"),
    item = ("/gallery/{id}", "/api/v1/gallery/{id}"),
);

content_endpoints!(
    BlogPost,
    name = blog,
    tag = "blogs",
    schema = BlogPostSchema,
    collection = ("/blogs", "/api/v1/blogs"),
    item = ("/blogs/{id}", "/api/v1/blogs/{id}"),
);

content_endpoints!(
    Branch,
    name = branch,
    tag = "branches",
    schema = BranchSchema,
    collection = ("/branches", "/api/v1/branches"),
    item = ("/branches/{id}", "/api/v1/branches/{id}"),
);

content_endpoints!(
    Offer,
    name = offer,
    tag = "offers",
    schema = OfferSchema,
    collection = ("/offers", "/api/v1/offers"),
    item = ("/offers/{id}", "/api/v1/offers/{id}"),
);

content_endpoints!(
    User,
    name = user,
    tag = "users",
    schema = UserSchema,
    collection = ("/users", "/api/v1/users"),
    item = ("/users/{id}", "/api/v1/users/{id}"),
);

/// Body of the gallery image endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequestBody {
    #[serde(default)]
    pub image_url: Option<String>,
}

fn image_url(body: Option<web::Json<ImageRequestBody>>) -> Option<String> {
    body.and_then(|json| json.into_inner().image_url)
}

/// Append an image URL to a gallery event.
#[utoipa::path(
    post,
    path = "/api/v1/gallery/{id}/images",
    params(("id" = String, Path, description = "Gallery event identifier")),
    request_body = ImageRequestSchema,
    responses(
        (status = 200, description = "Updated gallery event", body = SuccessEnvelopeSchema),
        (status = 400, description = "Image URL missing", body = FailureEnvelopeSchema),
        (status = 404, description = "Not found", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["gallery"]
)]
#[post("/gallery/{id}/images")]
pub async fn add_gallery_image(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: Option<web::Json<ImageRequestBody>>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id::<GalleryEvent>(&id)?;
    let record = state.gallery_images.add_image(&id, image_url(body)).await?;
    Ok(Envelope::data(record)
        .with_message("Image added successfully")
        .respond(StatusCode::OK))
}

/// Remove every occurrence of an image URL from a gallery event.
#[utoipa::path(
    delete,
    path = "/api/v1/gallery/{id}/images",
    params(("id" = String, Path, description = "Gallery event identifier")),
    request_body = ImageRequestSchema,
    responses(
        (status = 200, description = "Updated gallery event", body = SuccessEnvelopeSchema),
        (status = 400, description = "Image URL missing", body = FailureEnvelopeSchema),
        (status = 404, description = "Not found", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["gallery"]
)]
#[delete("/gallery/{id}/images")]
pub async fn remove_gallery_image(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: Option<web::Json<ImageRequestBody>>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id::<GalleryEvent>(&id)?;
    let record = state
        .gallery_images
        .remove_image(&id, image_url(body))
        .await?;
    Ok(Envelope::data(record)
        .with_message("Image removed successfully")
        .respond(StatusCode::OK))
}

/// Register every content route on an `/api/v1` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_gallery_image)
        .service(remove_gallery_image)
        .service(list_gallery)
        .service(get_gallery)
        .service(create_gallery)
        .service(update_gallery)
        .service(delete_gallery)
        .service(list_blog)
        .service(get_blog)
        .service(create_blog)
        .service(update_blog)
        .service(delete_blog)
        .service(list_branch)
        .service(get_branch)
        .service(create_branch)
        .service(update_branch)
        .service(delete_branch)
        .service(list_offer)
        .service(get_offer)
        .service(create_offer)
        .service(update_offer)
        .service(delete_offer)
        .service(list_user)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
