//! Structured dump sink boundary.
//!
//! Inspection is a pure side effect delegated to a collaborator: the wrapper
//! hands the decoded-or-raw body and the headers to a [`DumpSink`] and
//! consumes nothing back.

use super::Response;
use http::HeaderMap;
use serde_json::Value;

/// Side-effecting sink a response can be dumped into.
pub trait DumpSink {
    /// Receive the decoded body, or the sub-value a dump path selected.
    fn dump_value(&mut self, value: &Value);

    /// Receive the raw body text when it did not decode as JSON.
    fn dump_text(&mut self, text: &str);

    /// Receive the response headers.
    fn dump_headers(&mut self, headers: &HeaderMap);
}

/// Sink that logs through `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn dump_value(&mut self, value: &Value) {
        tracing::debug!(body = %value, "response body");
    }

    fn dump_text(&mut self, text: &str) {
        tracing::debug!(body = %text, "response body (raw)");
    }

    fn dump_headers(&mut self, headers: &HeaderMap) {
        tracing::debug!(?headers, "response headers");
    }
}

impl Response {
    /// Send the decoded-or-raw body to `sink`, optionally narrowed to a
    /// dotted `path`. A path that resolves to nothing dumps JSON null.
    pub fn dump_to(&self, sink: &mut dyn DumpSink, path: Option<&str>) -> &Self {
        match (self.decode(), path) {
            (Some(value), Some(path)) => {
                sink.dump_value(super::decode::path_get(value, path).unwrap_or(&Value::Null));
            }
            (Some(value), None) => sink.dump_value(value),
            (None, _) => sink.dump_text(self.body()),
        }
        self
    }

    /// Send the headers to `sink`.
    pub fn dump_headers_to(&self, sink: &mut dyn DumpSink) -> &Self {
        sink.dump_headers(self.headers());
        self
    }
}
