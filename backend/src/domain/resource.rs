//! Uniform resource model shared by every content collection.
//!
//! Each content entity implements [`Resource`], describing its collection,
//! required fields and field rules. The pure functions [`validate_create`]
//! and [`apply_patch`] turn client payloads into validated entities without
//! touching a store; repositories and services build on them.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::record::{Payload, RESERVED_KEYS, Record};
use super::validation::ValidationError;

/// Content collections exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Gallery,
    Blogs,
    Branches,
    Offers,
    Users,
}

impl ResourceKind {
    /// Every collection, in route registration order.
    pub const ALL: [Self; 5] = [
        Self::Gallery,
        Self::Blogs,
        Self::Branches,
        Self::Offers,
        Self::Users,
    ];

    /// Collection name, also used as the URL path segment.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Blogs => "blogs",
            Self::Branches => "branches",
            Self::Offers => "offers",
            Self::Users => "users",
        }
    }

    /// Singular label used in response messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery event",
            Self::Blogs => "Blog post",
            Self::Branches => "Branch",
            Self::Offers => "Offer",
            Self::Users => "User",
        }
    }

    /// Message returned when an identifier resolves to nothing.
    pub fn not_found_message(self) -> String {
        format!("{} not found", self.label())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Normalised value that must be unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueKey {
    pub field: &'static str,
    pub value: String,
}

impl UniqueKey {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A content entity stored in its own collection.
///
/// Implementors are plain serde types whose camelCase JSON form is the
/// stored document body.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Collection the entity lives in.
    const KIND: ResourceKind;

    /// JSON keys that must be present and non-blank on create.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Message returned when any required field is missing.
    const REQUIRED_MESSAGE: &'static str;

    /// JSON keys that may be set on create but never changed.
    const PROTECTED_FIELDS: &'static [&'static str] = &[];

    /// Field rules that hold for every stored body.
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Values the store keeps unique across the collection.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        Vec::new()
    }

    /// Reorder records for listing. Defaults to store order.
    fn order_for_listing(_records: &mut [Record<Self>]) {}
}

/// Decode and validate a create payload.
///
/// Required fields must be present and non-blank. Store-owned keys and
/// unknown keys are ignored.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use site_backend::domain::{GalleryEvent, validate_create};
///
/// let payload = json!({ "title": "Open Day", "coverImage": "cover.jpg" });
/// let event: GalleryEvent = validate_create(payload.as_object().expect("object"))
///     .expect("payload is valid");
/// assert!(event.images.is_empty());
/// ```
pub fn validate_create<E: Resource>(payload: &Payload) -> Result<E, ValidationError> {
    let missing: Vec<&'static str> = E::REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !is_present(payload.get(*field)))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired {
            message: E::REQUIRED_MESSAGE,
            fields: missing,
        });
    }

    let body = payload
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let entity: E = decode(body)?;
    entity.check()?;
    Ok(entity)
}

/// Merge a partial payload into an existing entity.
///
/// Keys in the payload overwrite the current values. Required fields are
/// not re-checked, but field rules and protected fields are.
pub fn apply_patch<E: Resource>(current: &E, patch: &Payload) -> Result<E, ValidationError> {
    let Value::Object(mut merged) =
        serde_json::to_value(current).map_err(|err| invalid_value(&err))?
    else {
        return Err(ValidationError::InvalidValue {
            reason: format!("{} body is not a JSON object", E::KIND),
        });
    };

    for (key, value) in patch.iter().filter(|(key, _)| !is_reserved(key)) {
        if E::PROTECTED_FIELDS.contains(&key.as_str()) && merged.get(key) != Some(value) {
            return Err(ValidationError::ProtectedField { field: key.clone() });
        }
        merged.insert(key.clone(), value.clone());
    }

    let entity: E = decode(merged)?;
    entity.check()?;
    Ok(entity)
}

fn decode<E: Resource>(body: Payload) -> Result<E, ValidationError> {
    serde_json::from_value(Value::Object(body)).map_err(|err| invalid_value(&err))
}

fn invalid_value(err: &serde_json::Error) -> ValidationError {
    ValidationError::InvalidValue {
        reason: err.to_string(),
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(_) => true,
    }
}
