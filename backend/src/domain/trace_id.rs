//! Correlation identifier carried by every request.
//!
//! The identifier lives in tokio task-local storage, so domain code such as
//! [`crate::domain::Error`] can pick it up without a parameter. Task locals
//! do not follow `tokio::spawn` or `spawn_blocking`; wrap such work in
//! [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Response header echoing the identifier back to the client.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Random UUID naming one request in logs, failure bodies and headers.
///
/// # Examples
/// ```
/// use site_backend::TraceId;
///
/// let id: TraceId = "7f3c8f8e-3c1b-4a8e-9a51-2b0d5b7c1e44".parse().expect("uuid");
/// assert_eq!(id.to_string(), "7f3c8f8e-3c1b-4a8e-9a51-2b0d5b7c1e44");
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `self` as the current identifier.
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }
}

impl From<Uuid> for TraceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
