//! Dictionary conversions for grouped models.
//!
//! A grouped model is encoded with `serde_json` and must come out as a JSON
//! object. Headers additionally need string values, subject to the
//! [`HeaderValuePolicy`].
//!
//! The `try_*` functions report every failure. The others absorb failures
//! into an empty mapping and log a warning under [`LOG_TARGET`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::config::{ConversionConfig, HeaderValuePolicy};
use crate::errors::{ConversionError, ConversionResult, JsonKind};

/// Header dictionary: serialization key to string value
pub type HeaderMap = BTreeMap<String, String>;

/// Body dictionary: serialization key to any JSON value
pub type BodyMap = serde_json::Map<String, Value>;

/// Log target for conversion events
pub const LOG_TARGET: &str = "request_model::conversion";

/// The two groups of a request model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Group {
    Headers,
    Body,
}

/// Encode a header group into a string dictionary
pub fn try_headers_dictionary<T>(headers: &T, config: &ConversionConfig) -> ConversionResult<HeaderMap>
where
    T: Serialize + ?Sized,
{
    let object = encode_object(headers, Group::Headers)?;

    let mut dictionary = HeaderMap::new();
    for (key, value) in object {
        if let Some(text) = header_value(&key, value, config.header_values)? {
            dictionary.insert(key, text);
        }
    }
    Ok(dictionary)
}

/// Encode a header group, or an empty dictionary if that fails
pub fn headers_dictionary<T>(headers: &T, config: &ConversionConfig) -> HeaderMap
where
    T: Serialize + ?Sized,
{
    degrade(Group::Headers, try_headers_dictionary(headers, config))
}

/// Encode a body group into a JSON object
pub fn try_body_dictionary<T>(body: &T) -> ConversionResult<BodyMap>
where
    T: Serialize + ?Sized,
{
    encode_object(body, Group::Body)
}

/// Encode a body group, or an empty dictionary if that fails
pub fn body_dictionary<T>(body: &T) -> BodyMap
where
    T: Serialize + ?Sized,
{
    degrade(Group::Body, try_body_dictionary(body))
}

/// Unwrap a conversion result, falling back to an empty mapping.
///
/// This is the only place conversion failures are swallowed.
pub fn degrade<M: Default>(group: Group, result: ConversionResult<M>) -> M {
    match result {
        Ok(dictionary) => dictionary,
        Err(err) => {
            log::warn!(
                target: LOG_TARGET,
                "{group} conversion failed, returning an empty mapping: {err}"
            );
            M::default()
        }
    }
}

fn encode_object<T>(value: &T, group: Group) -> ConversionResult<BodyMap>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(object) => Ok(object),
        other => Err(ConversionError::NotAnObject {
            group,
            found: JsonKind::of(&other),
        }),
    }
}

fn header_value(key: &str, value: Value, policy: HeaderValuePolicy) -> ConversionResult<Option<String>> {
    match (value, policy) {
        (Value::String(text), _) => Ok(Some(text)),
        (Value::Null, HeaderValuePolicy::Stringify) => {
            log::debug!(target: LOG_TARGET, "dropping null header \"{key}\"");
            Ok(None)
        }
        (value @ (Value::Bool(_) | Value::Number(_)), HeaderValuePolicy::Stringify) => {
            let text = value.to_string();
            log::debug!(target: LOG_TARGET, "stringified header \"{key}\" as \"{text}\"");
            Ok(Some(text))
        }
        (other, _) => Err(ConversionError::NonStringHeader {
            key: key.to_string(),
            found: JsonKind::of(&other),
        }),
    }
}
