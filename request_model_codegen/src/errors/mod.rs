use proc_macro2::Span;
use thiserror::Error;

use crate::parse::metadata::{DeclarationKind, Role, SerializationKey};

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Namespace prefixed to every diagnostic identifier
pub const DIAGNOSTIC_DOMAIN: &str = "request_model";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
}

/// Reasons a declaration cannot be expanded.
///
/// Every variant carries the span the diagnostic points at.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("#[request_model] can only be applied to a struct with named fields")]
    UnsupportedDeclarationKind { found: DeclarationKind, span: Span },
    #[error("field `{field}` cannot carry two roles, found both #[{first}] and #[{second}]")]
    ConflictingFieldRole {
        field: String,
        first: String,
        second: String,
        span: Span,
    },
    #[error("field `{field}` is declared more than once")]
    DuplicateFieldName { field: String, span: Span },
    #[error(
        "serialization key \"{key}\" is used by both `{first}` and `{second}` in the {role} group"
    )]
    DuplicateSerializationKey {
        role: Role,
        key: SerializationKey,
        first: String,
        second: String,
        span: Span,
    },
    #[error("field `{field}` collides with the generated {purpose} of the same name")]
    ReservedFieldName {
        field: String,
        purpose: &'static str,
        span: Span,
    },
    #[error("constructor `{name}` collides with the generated {purpose} of the same name")]
    ReservedConstructorName {
        name: String,
        purpose: &'static str,
        span: Span,
    },
    #[error(
        "field `{field}` sets #[serde(rename)], give the key in its marker instead, e.g. #[{tag}(\"{key}\")]"
    )]
    ConflictingRename {
        field: String,
        tag: String,
        key: String,
        span: Span,
    },
}

impl GenerationError {
    /// Stable identifier of the diagnostic
    pub fn id(&self) -> &'static str {
        match self {
            GenerationError::UnsupportedDeclarationKind { .. } => "struct-support-only",
            GenerationError::ConflictingFieldRole { .. } => "conflicting-field-role",
            GenerationError::DuplicateFieldName { .. } => "duplicate-field-name",
            GenerationError::DuplicateSerializationKey { .. } => "duplicate-serialization-key",
            GenerationError::ReservedFieldName { .. } => "reserved-field-name",
            GenerationError::ReservedConstructorName { .. } => "reserved-constructor-name",
            GenerationError::ConflictingRename { .. } => "conflicting-rename",
        }
    }

    /// Identifier qualified with [`DIAGNOSTIC_DOMAIN`]
    pub fn qualified_id(&self) -> String {
        format!("{}::{}", DIAGNOSTIC_DOMAIN, self.id())
    }

    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    pub fn span(&self) -> Span {
        match self {
            GenerationError::UnsupportedDeclarationKind { span, .. }
            | GenerationError::ConflictingFieldRole { span, .. }
            | GenerationError::DuplicateFieldName { span, .. }
            | GenerationError::DuplicateSerializationKey { span, .. }
            | GenerationError::ReservedFieldName { span, .. }
            | GenerationError::ReservedConstructorName { span, .. }
            | GenerationError::ConflictingRename { span, .. } => *span,
        }
    }

    pub fn into_syn_error(self) -> syn::Error {
        syn::Error::new(self.span(), self.to_string())
    }
}

impl From<GenerationError> for syn::Error {
    fn from(err: GenerationError) -> Self {
        err.into_syn_error()
    }
}
