//! Error materialization: turning failed responses into structured errors.
//!
//! Raising is always opt-in. Accessors never error for a bad HTTP status;
//! only the `error_*` family does, and only when the response actually
//! failed. Every variant funnels through [`Response::error_for_status`], so
//! a matching status that is not a 4xx/5xx never produces an error.

use super::Response;
use crate::base::error::RequestError;
use crate::base::truncation::TruncationPolicy;
use http::StatusCode;
use std::num::NonZeroUsize;

/// Condition accepted by [`Response::error_if`]: either a plain boolean or
/// a predicate over the response.
pub trait ErrorCondition {
    fn evaluate(self, response: &Response) -> bool;
}

impl ErrorCondition for bool {
    fn evaluate(self, _response: &Response) -> bool {
        self
    }
}

impl<F: FnOnce(&Response) -> bool> ErrorCondition for F {
    fn evaluate(self, response: &Response) -> bool {
        self(response)
    }
}

impl Response {
    /// Materialize a [`RequestError`] from this response.
    ///
    /// `None` unless the response failed. Each call re-snapshots current
    /// state; the excerpt honors the wrapper's truncation policy, falling
    /// back to the process-wide default when none was set.
    pub fn to_error(&self) -> Option<RequestError> {
        if !self.failed() {
            return None;
        }
        let limit = self.truncate_at.get().effective_limit();
        let (excerpt, truncated) = excerpt(self.body(), limit);
        tracing::debug!(status = %self.status(), truncated, "materialized request error");
        Some(RequestError::new(
            self.status(),
            self.reason().to_owned(),
            excerpt,
            truncated,
        ))
    }

    /// Error out iff the response failed; otherwise pass `self` through.
    pub fn error_for_status(&self) -> Result<&Self, RequestError> {
        match self.to_error() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }

    /// Like [`error_for_status`](Self::error_for_status), invoking `f` with
    /// the response and the constructed error before returning it. Intended
    /// for logging and other side effects.
    pub fn error_for_status_with(
        &self,
        f: impl FnOnce(&Self, &RequestError),
    ) -> Result<&Self, RequestError> {
        match self.to_error() {
            Some(error) => {
                f(self, &error);
                Err(error)
            }
            None => Ok(self),
        }
    }

    /// Error out iff `condition` holds for this response and it failed.
    ///
    /// `condition` is a plain `bool` or a predicate over the response.
    pub fn error_if(&self, condition: impl ErrorCondition) -> Result<&Self, RequestError> {
        if condition.evaluate(self) {
            self.error_for_status()
        } else {
            Ok(self)
        }
    }

    /// Error out iff the status equals `code` (and the response failed).
    ///
    /// A deny-list policy: callers raise for one specific status while
    /// suppressing every other failure.
    pub fn error_if_status(&self, code: StatusCode) -> Result<&Self, RequestError> {
        if self.status() == code {
            self.error_for_status()
        } else {
            Ok(self)
        }
    }

    /// [`error_if_status`](Self::error_if_status) with a predicate over the
    /// status and the response.
    pub fn error_if_status_matches(
        &self,
        pred: impl FnOnce(StatusCode, &Self) -> bool,
    ) -> Result<&Self, RequestError> {
        if pred(self.status(), self) {
            self.error_for_status()
        } else {
            Ok(self)
        }
    }

    /// Error out unless the status equals `code`: equality means no error.
    ///
    /// The allow-list inverse of [`error_if_status`](Self::error_if_status).
    pub fn error_unless_status(&self, code: StatusCode) -> Result<&Self, RequestError> {
        if self.status() == code {
            Ok(self)
        } else {
            self.error_for_status()
        }
    }

    /// [`error_unless_status`](Self::error_unless_status) with a predicate:
    /// a passing predicate means no error.
    pub fn error_unless_status_matches(
        &self,
        pred: impl FnOnce(StatusCode, &Self) -> bool,
    ) -> Result<&Self, RequestError> {
        if pred(self.status(), self) {
            Ok(self)
        } else {
            self.error_for_status()
        }
    }

    /// Error out iff the status is a 4xx.
    pub fn error_if_client_error(&self) -> Result<&Self, RequestError> {
        if self.client_error() {
            self.error_for_status()
        } else {
            Ok(self)
        }
    }

    /// Error out iff the status is a 5xx.
    pub fn error_if_server_error(&self) -> Result<&Self, RequestError> {
        if self.server_error() {
            self.error_for_status()
        } else {
            Ok(self)
        }
    }

    /// Truncate this wrapper's future error excerpts at `limit` characters.
    ///
    /// Persists for the wrapper's lifetime; overrides the process default.
    pub fn truncate_errors_at(&self, limit: NonZeroUsize) -> &Self {
        self.truncate_at.set(TruncationPolicy::At(limit));
        self
    }

    /// Include full bodies in this wrapper's future error excerpts.
    pub fn dont_truncate_errors(&self) -> &Self {
        self.truncate_at.set(TruncationPolicy::Unlimited);
        self
    }
}

/// Cut `body` down to `limit` characters; flag whether anything was dropped.
fn excerpt(body: &str, limit: Option<NonZeroUsize>) -> (String, bool) {
    let Some(limit) = limit else {
        return (body.to_owned(), false);
    };
    match body.char_indices().nth(limit.get()) {
        None => (body.to_owned(), false),
        Some((cut, _)) => (body[..cut].to_owned(), true),
    }
}
