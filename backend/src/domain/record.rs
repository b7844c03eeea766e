//! Stored record envelope shared by every content collection.
//!
//! A [`Record`] wraps an entity body with the identifier and timestamps the
//! store assigns. On the wire the body fields are flattened next to `id`,
//! `createdAt` and `updatedAt`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// JSON object received from clients for create and update requests.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Keys owned by the store; clients may send them but they are ignored.
pub(crate) const RESERVED_KEYS: &[&str] = &["id", "_id", "createdAt", "updatedAt"];

/// Store-generated record identifier.
///
/// # Examples
/// ```
/// use site_backend::domain::RecordId;
///
/// let id: RecordId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

/// Raised when a path segment is not a record identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record identifier must be a UUID")]
pub struct RecordIdParseError;

impl RecordId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| RecordIdParseError)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted entity together with its store metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<E> {
    id: RecordId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(flatten)]
    body: E,
}

impl<E> Record<E> {
    /// Assemble a record from its parts.
    pub fn from_parts(
        id: RecordId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        body: E,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            body,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn body(&self) -> &E {
        &self.body
    }

    pub fn into_body(self) -> E {
        self.body
    }

    /// Replace the body and stamp a new modification time.
    #[must_use]
    pub fn revised(self, body: E, updated_at: DateTime<Utc>) -> Self {
        Self {
            body,
            updated_at,
            ..self
        }
    }
}

/// Calendar date carried by event and offer fields.
///
/// Serialises as `YYYY-MM-DD`. Deserialisation also accepts an RFC 3339
/// timestamp, keeping its UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| Self(ts.with_timezone(&Utc).date_naive()))
            .map_err(|_| format!("`{trimmed}` is not a date (expected YYYY-MM-DD)"))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
