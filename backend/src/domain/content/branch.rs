//! Office branches listed on the contact page.

use serde::{Deserialize, Serialize};

use super::check_email;
use crate::domain::resource::{Resource, ResourceKind};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub is_head_office: bool,
}

impl Resource for Branch {
    const KIND: ResourceKind = ResourceKind::Branches;
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "address", "city"];
    const REQUIRED_MESSAGE: &'static str = "Name, address and city are required";

    fn check(&self) -> Result<(), ValidationError> {
        match self.email.as_deref() {
            Some(email) => check_email("email", email),
            None => Ok(()),
        }
    }
}
