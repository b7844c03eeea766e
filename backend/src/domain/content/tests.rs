//! Field rules and serialisation contracts for content entities.

use super::*;
use crate::domain::record::{Record, RecordId};
use crate::domain::resource::Resource;
use chrono::{DateTime, Duration, Utc};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn gallery_event() -> GalleryEvent {
    serde_json::from_value(json!({
        "title": "Open Day",
        "coverImage": "cover.jpg",
        "images": ["a.jpg", "b.jpg", "a.jpg"],
    }))
    .expect("fixture decodes")
}

fn epoch() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[rstest]
#[case("someone@example.com", true)]
#[case("a@b", true)]
#[case("missing-at.example.com", false)]
#[case("@example.com", false)]
#[case("someone@", false)]
#[case("two@@example.com", false)]
#[case("spaced name@example.com", false)]
fn classifies_emails(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_email(value), expected);
}

#[rstest]
fn images_without_removes_every_match(gallery_event: GalleryEvent) {
    assert_eq!(gallery_event.images_without("a.jpg"), vec!["b.jpg".to_owned()]);
}

#[rstest]
fn images_with_appends(gallery_event: GalleryEvent) {
    let images = gallery_event.images_with("c.jpg");
    assert_eq!(images.last().map(String::as_str), Some("c.jpg"));
    assert_eq!(images.len(), 4);
}

#[rstest]
fn gallery_listing_is_newest_first(gallery_event: GalleryEvent) {
    let base = epoch();
    let mut records: Vec<Record<GalleryEvent>> = (0..3)
        .map(|offset| {
            let at = base + Duration::minutes(offset);
            Record::from_parts(RecordId::random(), at, at, gallery_event.clone())
        })
        .collect();

    GalleryEvent::order_for_listing(&mut records);

    let stamps: Vec<_> = records.iter().map(Record::created_at).collect();
    assert_eq!(
        stamps,
        vec![
            base + Duration::minutes(2),
            base + Duration::minutes(1),
            base,
        ]
    );
}

#[rstest]
fn blog_defaults_to_draft() {
    let post: BlogPost = serde_json::from_value(json!({
        "title": "Studying in Canada",
        "slug": "studying-in-canada",
        "excerpt": "A primer",
        "content": "Long form",
        "author": "Counsellor",
        "category": "Guides",
    }))
    .expect("post decodes");

    assert_eq!(post.status, BlogStatus::Draft);
    assert!(!post.featured);
    assert!(post.check().is_ok());
    assert_eq!(post.unique_keys()[0].value, "studying-in-canada");
}

#[rstest]
fn blog_status_rejects_unknown_values() {
    let result = serde_json::from_value::<BlogStatus>(json!("Hidden"));
    assert!(result.is_err());
}

#[rstest]
#[case(json!("test-preparation"), OfferCategory::TestPreparation)]
#[case(json!("visa-assistance"), OfferCategory::VisaAssistance)]
#[case(json!("scholarship"), OfferCategory::Scholarship)]
fn offer_categories_are_kebab_case(
    #[case] raw: serde_json::Value,
    #[case] expected: OfferCategory,
) {
    let category: OfferCategory = serde_json::from_value(raw).expect("category decodes");
    assert_eq!(category, expected);
}

#[rstest]
fn offer_rejects_inverted_validity_window() {
    let offer: Offer = serde_json::from_value(json!({
        "title": "Early bird",
        "description": "Discount for early applicants",
        "category": "discount",
        "validFrom": "2025-06-01",
        "validUntil": "2025-05-01",
    }))
    .expect("offer decodes");

    assert_eq!(
        offer.check(),
        Err(crate::domain::ValidationError::InvalidRange {
            start: "validFrom",
            end: "validUntil",
        })
    );
}

#[rstest]
fn user_email_key_is_case_insensitive() {
    let user: User = serde_json::from_value(json!({
        "name": "Asha",
        "email": "Asha@Example.com",
    }))
    .expect("user decodes");

    assert_eq!(user.role, UserRole::Editor);
    assert_eq!(user.unique_keys()[0].value, "asha@example.com");
}

#[rstest]
fn branch_checks_optional_email() {
    let branch: Branch = serde_json::from_value(json!({
        "name": "Kathmandu",
        "address": "Putalisadak",
        "city": "Kathmandu",
        "email": "not-an-email",
    }))
    .expect("branch decodes");

    assert!(branch.check().is_err());
}

#[rstest]
fn unset_optionals_are_omitted(gallery_event: GalleryEvent) {
    let value = serde_json::to_value(&gallery_event).expect("event serialises");
    assert!(value.get("description").is_none());
    assert!(value.get("eventDate").is_none());
    assert_eq!(value["coverImage"], json!("cover.jpg"));
}
