//! Read-only key lookup over the decoded body.

use super::Response;
use crate::base::error::Error;
use serde_json::Value;

/// Immutable index-style accessor over the decoded top-level object.
///
/// Reads go through the wrapper's memoized decode. Writes and deletes fail
/// unconditionally; the view is read-only by contract, not by configuration.
#[derive(Debug, Clone, Copy)]
pub struct LookupView<'a> {
    response: &'a Response,
}

impl<'a> LookupView<'a> {
    pub(crate) fn new(response: &'a Response) -> Self {
        Self { response }
    }

    /// Value under `key` in the decoded top-level object.
    ///
    /// [`Error::KeyNotFound`] when the key is absent or the decoded value is
    /// not an object (including bodies that did not parse at all).
    pub fn get(&self, key: &str) -> Result<&'a Value, Error> {
        match self.response.decode() {
            Some(Value::Object(map)) => map.get(key).ok_or_else(|| Error::KeyNotFound {
                key: key.to_owned(),
            }),
            _ => Err(Error::KeyNotFound {
                key: key.to_owned(),
            }),
        }
    }

    /// Whether `key` is present in the decoded top level with a non-null
    /// value.
    pub fn has(&self, key: &str) -> bool {
        matches!(
            self.response.decode(),
            Some(Value::Object(map)) if map.get(key).is_some_and(|v| !v.is_null())
        )
    }

    /// Writes are forbidden; always [`Error::ImmutableView`].
    pub fn insert(&self, _key: &str, _value: Value) -> Result<(), Error> {
        Err(Error::ImmutableView)
    }

    /// Deletes are forbidden; always [`Error::ImmutableView`].
    pub fn remove(&self, _key: &str) -> Result<(), Error> {
        Err(Error::ImmutableView)
    }
}
