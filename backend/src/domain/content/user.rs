//! Staff accounts that manage site content.

use serde::{Deserialize, Serialize};

use super::check_email;
use crate::domain::resource::{Resource, ResourceKind, UniqueKey};
use crate::domain::validation::ValidationError;

/// Staff permission level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
}

/// A staff user. Emails are unique regardless of case.
///
/// `role` is fixed once the user exists; updates that change it are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "email"];
    const REQUIRED_MESSAGE: &'static str = "Name and email are required";
    const PROTECTED_FIELDS: &'static [&'static str] = &["role"];

    fn check(&self) -> Result<(), ValidationError> {
        check_email("email", &self.email)
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::new("email", self.email.to_lowercase())]
    }
}
