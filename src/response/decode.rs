//! Lazy JSON decoding and dotted-path traversal.
//!
//! Decoding is lenient by contract: a body that is not valid JSON, or a path
//! that traverses into nothing, is absence (`None`), never an error. Parsing
//! happens at most once per wrapper; the parsed value is memoized alongside
//! the raw-body buffer.

use super::Response;
use serde_json::Value;

impl Response {
    /// The body decoded as JSON, parsing at most once.
    ///
    /// `None` when the body is not valid JSON. Subsequent calls reuse the
    /// cached parse and do not touch the underlying stream again.
    pub fn decode(&self) -> Option<&Value> {
        self.decoded
            .get_or_init(|| {
                let parsed: Option<Value> = serde_json::from_str(self.body()).ok();
                if parsed.is_none() {
                    tracing::debug!(status = %self.status(), "response body is not valid JSON");
                }
                parsed
            })
            .as_ref()
    }

    /// Value at a dotted path through the decoded body.
    ///
    /// Segments traverse objects by key and arrays by numeric index, e.g.
    /// `"items.0.id"`. Any missing segment, non-container intermediate, or
    /// out-of-range index yields `None`.
    pub fn decode_path(&self, path: &str) -> Option<&Value> {
        self.decode().and_then(|value| path_get(value, path))
    }

    /// Like [`decode_path`](Self::decode_path), falling back to `default`
    /// when the path resolves to nothing.
    pub fn decode_path_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.decode_path(path).unwrap_or(default)
    }

    /// Deserialize the decoded body into a concrete type.
    ///
    /// `None` when the body did not parse or does not fit `T`.
    pub fn decode_as<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.decode()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Walk `value` one dot-separated segment at a time: objects by key, arrays
/// by numeric index.
pub(crate) fn path_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_get_traverses_objects_and_arrays() {
        let doc = json!({"a": {"b": [10, {"c": true}]}});
        assert_eq!(path_get(&doc, "a.b.0"), Some(&json!(10)));
        assert_eq!(path_get(&doc, "a.b.1.c"), Some(&json!(true)));
    }

    #[test]
    fn test_path_get_missing_segments_are_absence() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(path_get(&doc, "a.c"), None);
        assert_eq!(path_get(&doc, "a.b.c"), None);
        assert_eq!(path_get(&doc, "x"), None);
    }

    #[test]
    fn test_path_get_out_of_range_index_is_absence() {
        let doc = json!({"items": [1, 2]});
        assert_eq!(path_get(&doc, "items.2"), None);
        assert_eq!(path_get(&doc, "items.nope"), None);
    }

    #[test]
    fn test_path_get_on_scalar_root_is_absence() {
        assert_eq!(path_get(&json!(42), "anything"), None);
    }
}
