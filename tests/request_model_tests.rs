//! End-to-end tests applying `#[request_model]` to real structs

mod common;

use std::collections::BTreeMap;

use request_model::prelude::*;
use serde_json::json;

#[request_model]
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessage {
    #[header("Authorization")]
    token: String,
    #[body]
    message: String,
}

#[request_model]
#[derive(Debug)]
pub struct StartRequest {
    #[header("Authorization")]
    authorization: String,
    #[header("X-Request-Id")]
    request_id: String,
    #[body]
    name: String,
    #[body("max_retries")]
    retries: u32,
    #[body]
    tags: Vec<String>,
}

#[request_model]
pub struct Ping {}

#[request_model]
pub struct HeaderOnly {
    #[header]
    token: String,
}

#[request_model]
pub struct Interleaved {
    #[body]
    first: u8,
    #[header]
    second: String,
    #[body]
    third: bool,
    #[header("X-Fourth")]
    fourth: String,
}

#[request_model]
#[derive(Debug, Default)]
pub struct WithPlainFields {
    #[body]
    message: String,
    attempts: u8,
    label: Option<String>,
}

#[request_model]
pub struct MarkerArguments {
    #[header(Authorization)]
    token: String,
    #[header(key = "X-Key")]
    key: String,
    #[body("")]
    blank: u8,
    #[body("payload", "ignored")]
    data: String,
}

#[request_model(headers = "AuthHeaders", body = "AuthPayload", constructor = "build")]
pub struct Auth {
    #[header("Authorization")]
    token: String,
    #[body]
    user: String,
}

#[request_model(header_values = "stringify")]
pub struct Upload {
    #[header("X-Retries")]
    retries: u8,
    #[header("X-Dry-Run")]
    dry_run: bool,
    #[header("X-Trace")]
    trace: Option<String>,
    #[body]
    size: u64,
}

#[request_model]
pub struct StrictUpload {
    #[header("X-Retries")]
    retries: u8,
    #[body]
    size: u64,
}

#[request_model]
pub struct RawBody {
    #[header]
    token: String,
    #[body]
    chunks: BTreeMap<Vec<u8>, u8>,
}

#[request_model]
pub struct Typed {
    #[header("X-Kind")]
    r#ref: String,
    #[body]
    r#type: String,
}

#[request_model(constructor = "r#fn")]
pub struct RawConstructor {
    #[body]
    value: u8,
}

#[request_model]
#[derive(Debug, PartialEq, serde::Deserialize)]
pub struct Decodable {
    #[header("Authorization")]
    token: String,
    #[body]
    message: String,
}

mod api {
    use request_model::request_model;

    #[request_model]
    pub struct Lookup {
        /// Lookup key
        #[header("X-Key")]
        pub key: String,
        #[body]
        pub(crate) limit: u32,
    }
}

#[test]
fn test_token_and_message() {
    let request = SendMessage::new("Bearer abc".into(), "hello".into());

    assert_eq!(request.token(), "Bearer abc");
    assert_eq!(request.message(), "hello");

    let headers = request.headers_dictionary();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers["Authorization"], "Bearer abc");

    let body = request.body_dictionary();
    assert_eq!(body.len(), 1);
    assert_eq!(body["message"], json!("hello"));
}

#[test]
fn test_forwarded_derives_on_rewritten_struct() {
    let request = SendMessage::new("t".into(), "m".into());
    let copy = request.clone();
    assert_eq!(request, copy);
    assert_ne!(request, SendMessage::new("t".into(), "other".into()));
    let debug = format!("{request:?}");
    assert!(debug.contains("SendMessageHeaders"));
    assert!(debug.contains("\"m\""));
}

#[test]
fn test_start_request() {
    let request = StartRequest::new(
        "Bearer abc".into(),
        "req-1".into(),
        "nightly".into(),
        3,
        vec!["a".into(), "b".into()],
    );

    let headers = request.headers_dictionary();
    let expected: HeaderMap = [
        ("Authorization".to_string(), "Bearer abc".to_string()),
        ("X-Request-Id".to_string(), "req-1".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(headers, expected);

    let body = request.body_dictionary();
    assert_eq!(
        serde_json::Value::Object(body),
        json!({ "name": "nightly", "max_retries": 3, "tags": ["a", "b"] })
    );
    assert_eq!(*request.retries(), 3);
    assert_eq!(request.tags().len(), 2);
}

#[test]
fn test_empty_declaration() {
    let ping = Ping::new();
    assert!(ping.headers_dictionary().is_empty());
    assert!(ping.body_dictionary().is_empty());
    assert!(ping.try_headers_dictionary().unwrap().is_empty());
    assert!(ping.try_body_dictionary().unwrap().is_empty());
}

#[test]
fn test_header_only_body_is_empty_object() {
    let request = HeaderOnly::new("abc".into());
    assert_eq!(request.headers_dictionary()["token"], "abc");
    assert_eq!(request.try_body_dictionary().unwrap(), BodyMap::new());
}

#[test]
fn test_interleaved_fields() {
    // Constructor takes header fields first, then body fields
    let request = Interleaved::new("two".into(), "four".into(), 1, true);

    assert_eq!(*request.first(), 1);
    assert_eq!(request.second(), "two");
    assert!(*request.third());
    assert_eq!(request.fourth(), "four");

    let headers = request.headers_dictionary();
    assert_eq!(headers["second"], "two");
    assert_eq!(headers["X-Fourth"], "four");
    assert_eq!(request.body_dictionary()["first"], json!(1));
}

#[test]
fn test_plain_fields_are_defaulted_and_kept() {
    let mut request = WithPlainFields::new("hello".into());
    assert_eq!(request.attempts, 0);
    assert!(request.label.is_none());

    request.attempts += 1;
    assert_eq!(request.attempts, 1);

    let body = request.body_dictionary();
    assert_eq!(body.len(), 1);
    assert!(!body.contains_key("attempts"));

    let defaulted = WithPlainFields::default();
    assert_eq!(defaulted.message(), "");
}

#[test]
fn test_only_string_literals_are_keys() {
    let request = MarkerArguments::new("t".into(), "k".into(), 1, "d".into());

    let headers = request.headers_dictionary();
    assert_eq!(headers["token"], "t");
    assert_eq!(headers["key"], "k");
    assert!(!headers.contains_key("Authorization"));

    let body = request.body_dictionary();
    assert_eq!(body[""], json!(1));
    assert_eq!(body["payload"], json!("d"));
}

#[test]
fn test_configured_names() {
    let auth = Auth::build("Bearer abc".into(), "alice".into());
    let _: Option<AuthHeaders> = None;
    let _: Option<AuthPayload> = None;

    assert_eq!(auth.user(), "alice");
    assert_eq!(auth.headers_dictionary()["Authorization"], "Bearer abc");
}

#[test]
fn test_stringify_policy() {
    common::init_logging();
    let upload = Upload::new(2, true, None, 1024);

    let headers = upload.headers_dictionary();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers["X-Retries"], "2");
    assert_eq!(headers["X-Dry-Run"], "true");
    assert!(!headers.contains_key("X-Trace"));

    let traced = Upload::new(0, false, Some("abc".into()), 1);
    assert_eq!(traced.headers_dictionary()["X-Trace"], "abc");
}

#[test]
fn test_strict_policy_degrades_to_empty() {
    common::init_logging();
    let upload = StrictUpload::new(2, 1024);

    assert!(upload.headers_dictionary().is_empty());
    let err = upload.try_headers_dictionary().unwrap_err();
    assert!(matches!(err, ConversionError::NonStringHeader { ref key, .. } if key == "X-Retries"));

    // The body is unaffected
    assert_eq!(upload.body_dictionary()["size"], json!(1024));
}

#[test]
fn test_encode_failure_degrades_to_empty() {
    common::init_logging();
    let mut chunks = BTreeMap::new();
    chunks.insert(vec![1, 2], 3);
    let request = RawBody::new("abc".into(), chunks);

    assert!(request.body_dictionary().is_empty());
    assert!(matches!(
        request.try_body_dictionary(),
        Err(ConversionError::Encode(_))
    ));
    assert_eq!(request.headers_dictionary()["token"], "abc");
}

#[test]
fn test_deserialize_is_forwarded() -> anyhow::Result<()> {
    let decoded: Decodable = serde_json::from_value(json!({
        "headers": { "Authorization": "Bearer abc" },
        "body": { "message": "hello" },
    }))?;
    assert_eq!(decoded.token(), "Bearer abc");
    assert_eq!(decoded.message(), "hello");
    assert_eq!(decoded.headers_dictionary()["Authorization"], "Bearer abc");
    Ok(())
}

#[test]
fn test_visibility_is_kept_across_modules() {
    let lookup = api::Lookup::new("id-1".into(), 10);
    assert_eq!(lookup.key(), "id-1");
    assert_eq!(*lookup.limit(), 10);
    assert_eq!(lookup.headers_dictionary()["X-Key"], "id-1");
}

#[test]
fn test_generic_use_through_trait() {
    fn collect<M: RequestModel>(model: &M) -> (HeaderMap, BodyMap) {
        (model.headers_dictionary(), model.body_dictionary())
    }

    let (headers, body) = collect(&SendMessage::new("t".into(), "m".into()));
    assert_eq!(headers["Authorization"], "t");
    assert_eq!(body["message"], json!("m"));
}

#[test]
fn test_raw_field_names_are_unrawed_in_keys() {
    let request = Typed::new("kind".into(), "x".into());
    assert_eq!(request.r#type(), "x");
    assert_eq!(request.r#ref(), "kind");

    let body = request.body_dictionary();
    assert_eq!(body["type"], json!("x"));
    assert!(!body.contains_key("r#type"));
    assert_eq!(request.headers_dictionary()["X-Kind"], "kind");
}

#[test]
fn test_raw_constructor_name() {
    let request = RawConstructor::r#fn(3);
    assert_eq!(*request.value(), 3);
    assert_eq!(request.body_dictionary()["value"], json!(3));
}
