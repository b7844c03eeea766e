//! Content entities published on the consultancy site.
//!
//! Each entity is a serde document body implementing
//! [`Resource`](super::Resource). Optional fields are omitted from the stored
//! JSON when unset.

mod blog;
mod branch;
mod gallery;
mod offer;
mod user;

#[cfg(test)]
mod tests;

pub use blog::{BlogPost, BlogStatus};
pub use branch::Branch;
pub use gallery::GalleryEvent;
pub use offer::{Offer, OfferCategory, OfferStatus};
pub use user::{User, UserRole};

use super::validation::ValidationError;

/// Return `true` when `value` looks like `local@domain`.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed != value || trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn check_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail { field })
    }
}
