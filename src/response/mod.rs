//! The response wrapper: a policy layer over one completed HTTP response.
//!
//! [`Response`] owns the transport's completed response for its lifetime.
//! Status, reason, version and headers are snapshotted once at construction;
//! the body stream is read at most once, on demand, and every derived view
//! (raw text, decoded JSON, lookup view) is served from that single buffer.

pub mod decode;
pub mod dump;
pub mod lookupview;
pub mod materialize;
pub mod statusband;

pub use lookupview::LookupView;
pub use statusband::StatusBand;

use crate::base::truncation::TruncationPolicy;
use crate::transport::{BufferedResponse, CookieJar, TransferStats, TransportResponse};
use http::{HeaderMap, StatusCode, Version};
use serde_json::Value;
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// A completed HTTP response plus the policy layer over it.
///
/// Interior mutability covers exactly two things: the single body-read
/// memoization and the truncation-policy setter. Both are single-threaded
/// patterns (`OnceCell`, `Cell`), which deliberately keeps the wrapper
/// `!Sync`; one wrapper instance belongs to one thread.
pub struct Response {
    status: StatusCode,
    reason: Option<String>,
    version: Version,
    headers: HeaderMap,
    transport: RefCell<Box<dyn TransportResponse>>,
    body: OnceCell<String>,
    decoded: OnceCell<Option<Value>>,
    truncate_at: Cell<TruncationPolicy>,
    transfer_stats: Option<TransferStats>,
    cookies: CookieJar,
}

impl Response {
    /// Wrap a completed transport response.
    pub fn new(transport: impl TransportResponse + 'static) -> Self {
        Self::from_boxed(Box::new(transport))
    }

    fn from_boxed(transport: Box<dyn TransportResponse>) -> Self {
        Self {
            status: transport.status(),
            reason: transport.reason().map(str::to_owned),
            version: transport.version(),
            headers: transport.headers().clone(),
            transport: RefCell::new(transport),
            body: OnceCell::new(),
            decoded: OnceCell::new(),
            truncate_at: Cell::new(TruncationPolicy::Inherit),
            transfer_stats: None,
            cookies: CookieJar::new(),
        }
    }

    /// Attach transfer statistics reported by the client.
    pub fn with_transfer_stats(mut self, stats: TransferStats) -> Self {
        self.transfer_stats = Some(stats);
        self
    }

    /// Attach the cookies captured for this exchange.
    pub fn with_cookies(mut self, cookies: CookieJar) -> Self {
        self.cookies = cookies;
        self
    }

    /// Raw body text, lossily decoded as UTF-8.
    ///
    /// The underlying stream is read on first call and buffered; decoding
    /// shares the same buffer, so the stream is physically read at most once
    /// per wrapper no matter how body and decode calls interleave.
    pub fn body(&self) -> &str {
        self.body.get_or_init(|| {
            let bytes = self.transport.borrow_mut().take_body().unwrap_or_default();
            tracing::debug!(status = %self.status, len = bytes.len(), "buffered response body");
            String::from_utf8_lossy(&bytes).into_owned()
        })
    }

    /// Status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase: the transport's if it reported one, else the canonical
    /// phrase for the status code, else "".
    pub fn reason(&self) -> &str {
        self.reason
            .as_deref()
            .or_else(|| self.status.canonical_reason())
            .unwrap_or("")
    }

    /// Negotiated protocol version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// All response headers, multi-value semantics preserved.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value for a header name (case-insensitive); "" when the header
    /// is absent or its value is not valid UTF-8.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
    }

    /// Final URI after transport-level redirects, when the client reported it.
    pub fn effective_uri(&self) -> Option<&Url> {
        self.transfer_stats.as_ref().and_then(TransferStats::effective_uri)
    }

    /// Client diagnostics for this exchange; empty when none were attached.
    pub fn handler_stats(&self) -> HashMap<String, Value> {
        self.transfer_stats
            .as_ref()
            .map(|stats| stats.handler_stats().clone())
            .unwrap_or_default()
    }

    /// Cookies captured alongside this response, passed through opaquely.
    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Run `f` iff the response failed; returns `self` for chaining.
    pub fn on_error(&self, f: impl FnOnce(&Self)) -> &Self {
        if self.failed() {
            f(self);
        }
        self
    }

    /// Read-only key-indexed view over the decoded top-level value.
    pub fn view(&self) -> LookupView<'_> {
        LookupView::new(self)
    }

    /// Release the underlying body stream. Safe to call repeatedly; a second
    /// close is a no-op.
    pub fn close(&self) {
        self.transport.borrow_mut().close();
    }
}

impl From<BufferedResponse> for Response {
    fn from(transport: BufferedResponse) -> Self {
        Self::new(transport)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
