use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Errors produced by the response policy layer.
///
/// Decode problems never appear here: a body that fails to parse, or a path
/// that traverses into nothing, is represented as absence at the call site.
#[derive(Debug, Error)]
pub enum Error {
    /// A failed (4xx/5xx) response materialized into an error.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Lookup-view read of a key the decoded body does not contain.
    #[error("key `{key}` not found in decoded response body")]
    KeyNotFound {
        /// The key that was requested.
        key: String,
    },

    /// Write or delete attempted through the read-only lookup view.
    #[error("response data may not be mutated through the lookup view")]
    ImmutableView,
}

/// A failed HTTP response materialized into an error value.
///
/// Snapshots the status, reason phrase, and a body excerpt at construction
/// time, so a raised failure is diagnosable without refetching the response.
/// The originating [`Response`](crate::Response) is handed to error
/// callbacks alongside this value rather than stored inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    status: StatusCode,
    reason: String,
    excerpt: String,
    truncated: bool,
}

impl RequestError {
    pub(crate) fn new(
        status: StatusCode,
        reason: String,
        excerpt: String,
        truncated: bool,
    ) -> Self {
        Self {
            status,
            reason,
            excerpt,
            truncated,
        }
    }

    /// Status code of the failed response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase of the failed response.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Body excerpt, possibly truncated per the wrapper's policy.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Whether the excerpt was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP request returned status code {}", self.status.as_u16())?;
        if !self.reason.is_empty() {
            write!(f, " ({})", self.reason)?;
        }
        if !self.excerpt.is_empty() {
            write!(f, ": {}", self.excerpt)?;
            if self.truncated {
                f.write_str(" (truncated...)")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {}
