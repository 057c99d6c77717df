use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use httpwrap::{BufferedResponse, DumpSink, Response};
use serde_json::{json, Value};

/// Sink that records everything it is handed.
#[derive(Default)]
struct RecordingSink {
    values: Vec<Value>,
    texts: Vec<String>,
    header_dumps: usize,
}

impl DumpSink for RecordingSink {
    fn dump_value(&mut self, value: &Value) {
        self.values.push(value.clone());
    }

    fn dump_text(&mut self, text: &str) {
        self.texts.push(text.to_owned());
    }

    fn dump_headers(&mut self, _headers: &http::HeaderMap) {
        self.header_dumps += 1;
    }
}

#[test]
fn test_dump_routes_decoded_bodies_as_values() {
    let resp = Response::new(
        BufferedResponse::new(StatusCode::OK).with_body(r#"{"a":{"b":1}}"#),
    );
    let mut sink = RecordingSink::default();

    resp.dump_to(&mut sink, None).dump_to(&mut sink, Some("a.b"));

    assert_eq!(sink.values, vec![json!({"a": {"b": 1}}), json!(1)]);
    assert!(sink.texts.is_empty());
}

#[test]
fn test_dump_falls_back_to_raw_text() {
    let resp = Response::new(BufferedResponse::new(StatusCode::OK).with_body("plain text"));
    let mut sink = RecordingSink::default();

    resp.dump_to(&mut sink, None);

    assert!(sink.values.is_empty());
    assert_eq!(sink.texts, vec!["plain text".to_owned()]);
}

#[test]
fn test_dump_unresolved_path_is_null() {
    let resp = Response::new(BufferedResponse::new(StatusCode::OK).with_body(r#"{"a":1}"#));
    let mut sink = RecordingSink::default();

    resp.dump_to(&mut sink, Some("a.missing"));

    assert_eq!(sink.values, vec![Value::Null]);
}

#[test]
fn test_dump_headers_to_sink() {
    let resp = Response::new(BufferedResponse::new(StatusCode::OK).with_header(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("application/json"),
    ));
    let mut sink = RecordingSink::default();

    resp.dump_headers_to(&mut sink).dump_headers_to(&mut sink);

    assert_eq!(sink.header_dumps, 2);
}
