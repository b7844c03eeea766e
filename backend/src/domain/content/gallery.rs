//! Gallery events: photo sets from open days, seminars and fairs.

use serde::{Deserialize, Serialize};

use crate::domain::record::{CalendarDate, Record};
use crate::domain::resource::{Resource, ResourceKind};

/// A gallery event with its cover and photo URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEvent {
    pub title: String,
    pub cover_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl GalleryEvent {
    /// Images after appending `url`.
    pub fn images_with(&self, url: &str) -> Vec<String> {
        let mut images = self.images.clone();
        images.push(url.to_owned());
        images
    }

    /// Images after dropping every entry equal to `url`.
    ///
    /// Duplicates are removed together; the list behaves like a set here.
    pub fn images_without(&self, url: &str) -> Vec<String> {
        self.images
            .iter()
            .filter(|image| image.as_str() != url)
            .cloned()
            .collect()
    }
}

impl Resource for GalleryEvent {
    const KIND: ResourceKind = ResourceKind::Gallery;
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "coverImage"];
    const REQUIRED_MESSAGE: &'static str = "Title and cover image are required";

    fn order_for_listing(records: &mut [Record<Self>]) {
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
    }
}
