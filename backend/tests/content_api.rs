//! End-to-end behaviour of the content API over the in-memory store.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use site_backend::Trace;
use site_backend::domain::TRACE_ID_HEADER;
use site_backend::inbound::http::api_scope;
use site_backend::inbound::http::error::route_not_found;
use site_backend::test_support::in_memory_state;

trait TestApp:
    Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

impl<S> TestApp for S where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

async fn content_app() -> impl TestApp {
    test::init_service(
        App::new()
            .app_data(web::Data::new(in_memory_state()))
            .wrap(Trace)
            .service(api_scope())
            .default_service(web::to(route_not_found)),
    )
    .await
}

async fn call(app: &impl TestApp, req: test::TestRequest) -> (StatusCode, Value) {
    let res = test::call_service(app, req.to_request()).await;
    assert!(
        res.headers().contains_key(TRACE_ID_HEADER),
        "every response carries a trace id"
    );
    let status = res.status();
    (status, test::read_body_json(res).await)
}

async fn count(app: &impl TestApp, collection: &str) -> usize {
    let (status, body) = call(app, test::TestRequest::get().uri(&format!("/api/v1/{collection}"))).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].as_array().map_or(0, Vec::len)
}

async fn created_id(app: &impl TestApp, collection: &str, payload: Value) -> String {
    let (status, body) = call(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/{collection}"))
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body["data"]["id"]
        .as_str()
        .expect("created record has an id")
        .to_owned()
}

fn valid_payload(collection: &str) -> Value {
    match collection {
        "gallery" => json!({ "title": "Open Day", "coverImage": "cover.jpg" }),
        "blogs" => json!({
            "title": "IELTS tips",
            "slug": "ielts-tips",
            "excerpt": "Five tips",
            "content": "Practise daily.",
            "author": "Asha",
            "category": "Test preparation",
        }),
        "branches" => json!({ "name": "Pokhara", "address": "Lakeside", "city": "Pokhara" }),
        "offers" => json!({
            "title": "Scholarship week",
            "description": "Up to 50% tuition waiver",
            "category": "scholarship",
        }),
        "users" => json!({ "name": "Asha", "email": "asha@example.com" }),
        other => panic!("no payload for {other}"),
    }
}

#[rstest]
#[case("gallery", json!({ "title": "Open Day" }))]
#[case("blogs", json!({ "title": "IELTS tips", "slug": "ielts-tips" }))]
#[case("branches", json!({ "name": "Pokhara", "city": "Pokhara" }))]
#[case("offers", json!({ "title": "Scholarship week", "description": "" }))]
#[case("users", json!({ "email": "asha@example.com" }))]
#[actix_web::test]
async fn create_without_required_fields_is_rejected(#[case] collection: &str, #[case] payload: Value) {
    let app = content_app().await;
    let (status, body) = call(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/{collection}"))
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].is_string());
    assert_eq!(count(&app, collection).await, 0);
}

#[rstest]
#[case("gallery")]
#[case("blogs")]
#[case("branches")]
#[case("offers")]
#[case("users")]
#[actix_web::test]
async fn records_round_trip_through_every_verb(#[case] collection: &str) {
    let app = content_app().await;
    let id = created_id(&app, collection, valid_payload(collection)).await;
    let item = format!("/api/v1/{collection}/{id}");

    let (status, fetched) = call(&app, test::TestRequest::get().uri(&item)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["id"], json!(id));

    let (status, updated) = call(&app, test::TestRequest::put().uri(&item).set_json(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["createdAt"], fetched["data"]["createdAt"]);
    assert_ne!(updated["data"]["updatedAt"], fetched["data"]["updatedAt"]);

    let (status, deleted) = call(&app, test::TestRequest::delete().uri(&item)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], json!(true));
    assert!(deleted.get("data").is_none());

    let (status, _) = call(&app, test::TestRequest::get().uri(&item)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count(&app, collection).await, 0);
}

#[rstest]
#[actix_web::test]
async fn deleting_an_unknown_record_changes_nothing() {
    let app = content_app().await;
    created_id(&app, "offers", valid_payload("offers")).await;

    let (status, body) = call(
        &app,
        test::TestRequest::delete().uri("/api/v1/offers/00000000-0000-4000-8000-000000000000"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Offer not found"));
    assert_eq!(count(&app, "offers").await, 1);
}

#[rstest]
#[actix_web::test]
async fn gallery_is_listed_newest_first() {
    let app = content_app().await;
    let mut ids = Vec::new();
    for title in ["Open Day", "Visa camp", "Graduation"] {
        ids.push(created_id(&app, "gallery", json!({ "title": title, "coverImage": "c.jpg" })).await);
    }

    let (_, body) = call(&app, test::TestRequest::get().uri("/api/v1/gallery")).await;
    let listed: Vec<&str> = body["data"]
        .as_array()
        .expect("data is a list")
        .iter()
        .filter_map(|record| record["id"].as_str())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[rstest]
#[actix_web::test]
async fn gallery_image_scenario() {
    let app = content_app().await;
    let (status, created) = call(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/gallery")
            .set_json(json!({ "title": "Open Day", "coverImage": "cover.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["images"], json!([]));
    let id = created["data"]["id"].as_str().expect("created record has an id");
    let images = format!("/api/v1/gallery/{id}/images");

    for (url, expected) in [("a.jpg", json!(["a.jpg"])), ("b.jpg", json!(["a.jpg", "b.jpg"]))] {
        let (status, body) = call(
            &app,
            test::TestRequest::post().uri(&images).set_json(json!({ "imageUrl": url })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], json!("Image added successfully"));
        assert_eq!(body["data"]["images"], expected);
    }

    let (status, body) = call(
        &app,
        test::TestRequest::delete().uri(&images).set_json(json!({ "imageUrl": "a.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["images"], json!(["b.jpg"]));

    let (_, fetched) = call(&app, test::TestRequest::get().uri(&format!("/api/v1/gallery/{id}"))).await;
    assert_eq!(fetched["data"]["images"], json!(["b.jpg"]));
    assert_eq!(fetched["data"]["title"], json!("Open Day"));
}

#[rstest]
#[actix_web::test]
async fn removing_an_image_removes_every_copy() {
    let app = content_app().await;
    let id = created_id(&app, "gallery", json!({
        "title": "Open Day",
        "coverImage": "cover.jpg",
        "images": ["a.jpg", "b.jpg", "a.jpg"],
    }))
    .await;

    let (_, body) = call(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/gallery/{id}/images"))
            .set_json(json!({ "imageUrl": "a.jpg" })),
    )
    .await;
    assert_eq!(body["data"]["images"], json!(["b.jpg"]));
}

#[rstest]
#[actix_web::test]
async fn duplicate_blog_slug_creates_no_second_record() {
    let app = content_app().await;
    created_id(&app, "blogs", valid_payload("blogs")).await;

    let (status, body) = call(
        &app,
        test::TestRequest::post().uri("/api/v1/blogs").set_json(valid_payload("blogs")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["details"]["field"], json!("slug"));
    assert_eq!(count(&app, "blogs").await, 1);
}

#[rstest]
#[case("offers", json!({ "category": "lottery" }))]
#[case("blogs", json!({ "status": "Deleted" }))]
#[case("users", json!({ "email": "not-an-email" }))]
#[case("offers", json!({ "validFrom": "2025-06-01", "validUntil": "2025-05-01" }))]
#[actix_web::test]
async fn invalid_updates_leave_the_record_untouched(#[case] collection: &str, #[case] patch: Value) {
    let app = content_app().await;
    let id = created_id(&app, collection, valid_payload(collection)).await;
    let item = format!("/api/v1/{collection}/{id}");
    let (_, before) = call(&app, test::TestRequest::get().uri(&item)).await;

    let (status, body) = call(&app, test::TestRequest::put().uri(&item).set_json(patch)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected body: {body}");

    let (_, after) = call(&app, test::TestRequest::get().uri(&item)).await;
    assert_eq!(after, before);
}

#[rstest]
#[actix_web::test]
async fn failures_carry_the_response_trace_id() {
    let app = content_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users/missing").to_request(),
    )
    .await;
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;

    assert_eq!(body["traceId"], json!(header));
}
