//! Blog posts.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{Resource, ResourceKind, UniqueKey};
use crate::domain::slug::is_valid_slug;
use crate::domain::validation::ValidationError;

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A blog post addressed by its unique slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub featured: bool,
    /// Estimated reading time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
}

impl Resource for BlogPost {
    const KIND: ResourceKind = ResourceKind::Blogs;
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["title", "slug", "excerpt", "content", "author", "category"];
    const REQUIRED_MESSAGE: &'static str =
        "Title, slug, excerpt, content, author and category are required";

    fn check(&self) -> Result<(), ValidationError> {
        if is_valid_slug(&self.slug) {
            Ok(())
        } else {
            Err(ValidationError::InvalidSlug { field: "slug" })
        }
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::new("slug", self.slug.clone())]
    }
}
