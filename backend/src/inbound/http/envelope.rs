//! Uniform JSON envelope wrapped around every API response.
//!
//! ```text
//! { "success": true,  "data": …, "message": "…" }
//! { "success": false, "message": "…", "code": "not_found", "traceId": "…" }
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::Error;

/// Successful response body carrying data, a message, or both.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a payload.
    ///
    /// # Examples
    /// ```
    /// use site_backend::inbound::http::envelope::Envelope;
    ///
    /// let body = serde_json::to_value(Envelope::data(vec![1, 2])).expect("serialises");
    /// assert_eq!(body, serde_json::json!({ "success": true, "data": [1, 2] }));
    /// ```
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Render the envelope as a JSON response with `status`.
    pub fn respond(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

impl Envelope<()> {
    /// Acknowledgement without a data payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Failure body: `success: false` followed by the error fields.
#[derive(Debug, Serialize)]
pub(crate) struct Failure<'a> {
    success: bool,
    #[serde(flatten)]
    error: &'a Error,
}

impl<'a> Failure<'a> {
    pub(crate) fn new(error: &'a Error) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn to_json(value: impl Serialize) -> Value {
        serde_json::to_value(value).expect("envelope serialises")
    }

    #[rstest]
    fn data_envelope_omits_message() {
        assert_eq!(
            to_json(Envelope::data(json!({ "id": 1 }))),
            json!({ "success": true, "data": { "id": 1 } })
        );
    }

    #[rstest]
    fn message_envelope_omits_data() {
        assert_eq!(
            to_json(Envelope::message("Branch deleted successfully")),
            json!({ "success": true, "message": "Branch deleted successfully" })
        );
    }

    #[rstest]
    fn data_and_message_can_travel_together() {
        assert_eq!(
            to_json(Envelope::data(Vec::<u8>::new()).with_message("done")),
            json!({ "success": true, "data": [], "message": "done" })
        );
    }

    #[rstest]
    fn failure_flattens_error_fields() {
        let error = Error::not_found("Offer not found").with_trace_id("abc");
        assert_eq!(
            to_json(Failure::new(&error)),
            json!({
                "success": false,
                "code": "not_found",
                "message": "Offer not found",
                "traceId": "abc",
            })
        );
    }
}
