//! Transport boundary: the capability set an HTTP client adapts to.
//!
//! The policy layer never talks to a client directly. Everything it asks of
//! one is listed on [`TransportResponse`]; there is no open-ended
//! forwarding. Status, reason, version and headers are read once when a
//! wrapper is built, the body is handed over at most once, and `close` is
//! best-effort cleanup.

pub mod cookies;
pub mod transferstats;

pub use cookies::CookieJar;
pub use transferstats::TransferStats;

use bytes::Bytes;
use http::{HeaderMap, StatusCode, Version};

/// A completed response as the transport collaborator exposes it.
pub trait TransportResponse {
    /// Status code of the completed response.
    fn status(&self) -> StatusCode;

    /// Reason phrase override. `None` falls back to the canonical phrase
    /// for the status code.
    fn reason(&self) -> Option<&str> {
        None
    }

    /// Negotiated protocol version.
    fn version(&self) -> Version {
        Version::HTTP_11
    }

    /// Response headers, multi-value semantics preserved.
    fn headers(&self) -> &HeaderMap;

    /// Hand over the body. Single-read: subsequent calls return `None`.
    fn take_body(&mut self) -> Option<Bytes>;

    /// Release the underlying stream. Must tolerate repeated calls and an
    /// already-released stream without erroring.
    fn close(&mut self);
}

/// In-memory transport response.
///
/// The adapter type for clients that already hold the complete body, and
/// the base test double for everything in this crate.
#[derive(Debug, Clone)]
pub struct BufferedResponse {
    status: StatusCode,
    reason: Option<String>,
    version: Version,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl BufferedResponse {
    /// Create a response with the given status and no body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set the body payload.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a header, keeping any existing values for the same name.
    pub fn with_header(mut self, name: http::header::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Override the reason phrase reported by the server.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the protocol version.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }
}

impl TransportResponse for BufferedResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    fn version(&self) -> Version {
        self.version
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn take_body(&mut self) -> Option<Bytes> {
        self.body.take()
    }

    fn close(&mut self) {
        self.body = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_body_is_single_read() {
        let mut resp = BufferedResponse::new(StatusCode::OK).with_body("payload");
        assert_eq!(resp.take_body(), Some(Bytes::from("payload")));
        assert_eq!(resp.take_body(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut resp = BufferedResponse::new(StatusCode::OK).with_body("payload");
        resp.close();
        resp.close();
        assert_eq!(resp.take_body(), None);
    }
}
