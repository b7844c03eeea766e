//! Turns domain failures into failure envelopes.
//!
//! The domain `Error` knows nothing about HTTP; this module owns the status
//! mapping, the `trace-id` header and hiding internal detail from clients.

use std::borrow::Cow;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Value, json};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::envelope::Failure;

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// What a client may see of `error`.
///
/// Internal failures are replaced by an opaque message. Only the trace id
/// and a string `reason` in the details survive, so the logged detail can
/// still be found.
fn client_view(error: &Error) -> Cow<'_, Error> {
    if error.code() != ErrorCode::InternalError {
        return Cow::Borrowed(error);
    }
    let mut opaque = Error::internal(INTERNAL_MESSAGE);
    if let Some(id) = error.trace_id() {
        opaque = opaque.with_trace_id(id);
    }
    if let Some(reason) = error
        .details()
        .and_then(|details| details.get("reason"))
        .and_then(Value::as_str)
    {
        opaque = opaque.with_details(json!({ "reason": reason }));
    }
    Cow::Owned(opaque)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let view = client_view(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = view.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(Failure::new(&view))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced from a handler");
        Self::internal(INTERNAL_MESSAGE)
    }
}

/// Failure for a request body that is not a JSON object.
///
/// Installed as the `web::JsonConfig` error handler by [`super::api_scope`].
pub fn json_body_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request("Request body must be a JSON object")
        .with_details(json!({ "code": "invalid_json", "reason": err.to_string() }))
}

/// Fallback for paths outside the API surface.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Route not found"))
}
