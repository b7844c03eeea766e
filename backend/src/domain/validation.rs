//! Validation failures raised while decoding or merging content payloads.

use std::fmt;

/// Validation errors returned by payload decoding, field rules and the
/// store's uniqueness checks.
///
/// Every variant maps to a 400 response at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank on create.
    MissingRequired {
        message: &'static str,
        fields: Vec<&'static str>,
    },
    /// A field held a value of the wrong type or outside its closed set.
    InvalidValue { reason: String },
    /// A slug contained characters outside `[a-z0-9-]`.
    InvalidSlug { field: &'static str },
    /// An email address was not of the form `local@domain`.
    InvalidEmail { field: &'static str },
    /// The end of a date range preceded its start.
    InvalidRange {
        start: &'static str,
        end: &'static str,
    },
    /// Another record in the collection already holds the value.
    Duplicate { field: String },
    /// The field may be set on create but never changed afterwards.
    ProtectedField { field: String },
}

impl ValidationError {
    /// Stable machine-readable code surfaced in error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequired { .. } => "missing_field",
            Self::InvalidValue { .. }
            | Self::InvalidSlug { .. }
            | Self::InvalidEmail { .. }
            | Self::InvalidRange { .. } => "invalid_value",
            Self::Duplicate { .. } => "duplicate_value",
            Self::ProtectedField { .. } => "protected_field",
        }
    }

    /// The field the failure concerns, when it names exactly one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidSlug { field } | Self::InvalidEmail { field } => Some(field),
            Self::InvalidRange { end, .. } => Some(end),
            Self::Duplicate { field } | Self::ProtectedField { field } => Some(field),
            Self::MissingRequired { .. } | Self::InvalidValue { .. } => None,
        }
    }

    pub(crate) fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { message, .. } => f.write_str(message),
            Self::InvalidValue { reason } => write!(f, "Invalid field value: {reason}"),
            Self::InvalidSlug { field } => write!(
                f,
                "{field} must contain lowercase ASCII letters, digits, and hyphens"
            ),
            Self::InvalidEmail { field } => write!(f, "{field} must be a valid email address"),
            Self::InvalidRange { start, end } => {
                write!(f, "{end} must not be earlier than {start}")
            }
            Self::Duplicate { field } => write!(f, "A record with this {field} already exists"),
            Self::ProtectedField { field } => write!(f, "{field} cannot be changed"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ValidationError::MissingRequired { message: "Name and email are required", fields: vec!["email"] },
        "missing_field",
        "Name and email are required"
    )]
    #[case(
        ValidationError::duplicate("slug"),
        "duplicate_value",
        "A record with this slug already exists"
    )]
    #[case(
        ValidationError::ProtectedField { field: "role".to_owned() },
        "protected_field",
        "role cannot be changed"
    )]
    #[case(
        ValidationError::InvalidRange { start: "validFrom", end: "validUntil" },
        "invalid_value",
        "validUntil must not be earlier than validFrom"
    )]
    fn exposes_code_and_message(
        #[case] error: ValidationError,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        assert_eq!(error.code(), code);
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    fn missing_required_has_no_single_field() {
        let error = ValidationError::MissingRequired {
            message: "Title and cover image are required",
            fields: vec!["title", "coverImage"],
        };
        assert!(error.field().is_none());
    }
}
