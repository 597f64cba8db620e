use serde_json::Value;
use thiserror::Error;

use crate::conversion::Group;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Kind of a JSON value, for error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

/// Reasons a grouped model cannot be turned into a dictionary
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Encode Error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{group} group encoded to {found}, expected an object")]
    NotAnObject { group: Group, found: JsonKind },

    #[error("header \"{key}\" encoded to {found}, expected a string")]
    NonStringHeader { key: String, found: JsonKind },
}
