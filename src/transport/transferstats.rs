//! Transfer statistics reported by the transport collaborator.

use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// Read-only diagnostics a client may attach to a wrapped response.
///
/// Carries the effective URI observed after transport-level redirects and an
/// opaque map of handler diagnostics. The policy layer only reads these.
#[derive(Debug, Clone, Default)]
pub struct TransferStats {
    effective_uri: Option<Url>,
    handler_stats: HashMap<String, Value>,
}

impl TransferStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the final URI the transport ended up at.
    pub fn with_effective_uri(mut self, uri: Url) -> Self {
        self.effective_uri = Some(uri);
        self
    }

    /// Attach one opaque diagnostic entry.
    pub fn with_handler_stat(mut self, key: impl Into<String>, value: Value) -> Self {
        self.handler_stats.insert(key.into(), value);
        self
    }

    /// Final URI after any transport-level redirects.
    pub fn effective_uri(&self) -> Option<&Url> {
        self.effective_uri.as_ref()
    }

    /// Opaque handler diagnostics.
    pub fn handler_stats(&self) -> &HashMap<String, Value> {
        &self.handler_stats
    }
}
