//! # httpwrap
//!
//! A policy layer over completed HTTP responses.
//!
//! `httpwrap` decorates a response some HTTP client has already received and
//! turns its opaque status code and body into actionable control flow:
//! status-band classification, lazy memoized JSON decoding, conditional
//! error materialization with configurable body truncation, and a read-only
//! key-lookup view. It performs no networking of its own; the transport is
//! an external collaborator reached through the [`TransportResponse`] trait.
//!
//! ## Features
//!
//! - **Status classification**: five closed-open bands over `[100, 600)`
//! - **Lazy decoding**: the body stream is read and parsed at most once
//! - **Error materialization**: opt-in `error_*` family with allow-list and
//!   deny-list status policies
//! - **Truncation policy**: per-wrapper override of a process-wide default
//! - **Lookup view**: immutable index-style access to decoded top-level keys
//!
//! ## Quick Start
//!
//! ```rust
//! use http::StatusCode;
//! use httpwrap::{BufferedResponse, Response};
//!
//! let response = Response::new(
//!     BufferedResponse::new(StatusCode::OK).with_body(r#"{"user":{"id":7}}"#),
//! );
//!
//! assert!(response.successful());
//! assert_eq!(response.decode_path("user.id").and_then(|v| v.as_u64()), Some(7));
//! response.error_for_status().expect("2xx never materializes an error");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and truncation configuration
//! - [`response`] - The response wrapper and its derived views
//! - [`transport`] - The capability boundary a client adapts to

pub mod base;
pub mod response;
pub mod transport;

pub use base::error::{Error, RequestError};
pub use base::truncation::{TruncationGuard, TruncationPolicy};
pub use response::dump::{DumpSink, TracingSink};
pub use response::materialize::ErrorCondition;
pub use response::{LookupView, Response, StatusBand};
pub use transport::{BufferedResponse, CookieJar, TransferStats, TransportResponse};
