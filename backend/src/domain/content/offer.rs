//! Promotional offers: scholarships, discounts and service bundles.

use serde::{Deserialize, Serialize};

use crate::domain::record::CalendarDate;
use crate::domain::resource::{Resource, ResourceKind};
use crate::domain::validation::ValidationError;

/// Closed set of offer categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferCategory {
    Scholarship,
    Discount,
    TestPreparation,
    VisaAssistance,
    Accommodation,
    Other,
}

/// Whether an offer is running, announced or finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Current,
    Upcoming,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub title: String,
    pub description: String,
    pub category: OfferCategory,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form discount label such as "20%" or "NPR 5,000".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<CalendarDate>,
}

impl Resource for Offer {
    const KIND: ResourceKind = ResourceKind::Offers;
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "description", "category"];
    const REQUIRED_MESSAGE: &'static str = "Title, description and category are required";

    fn check(&self) -> Result<(), ValidationError> {
        match (self.valid_from, self.valid_until) {
            (Some(from), Some(until)) if until < from => Err(ValidationError::InvalidRange {
                start: "validFrom",
                end: "validUntil",
            }),
            _ => Ok(()),
        }
    }
}
