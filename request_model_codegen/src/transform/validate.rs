use std::collections::{HashMap, HashSet};

use syn::{
    Attribute, Expr, ExprLit, Lit, Meta, MetaNameValue, Token, punctuated::Punctuated,
    spanned::Spanned,
};

use crate::config::GeneratorConfig;
use crate::errors::{GenerationError, GenerationResult};
use crate::parse::metadata::{ClassifiedField, Declaration, DeclarationKind, Role};
use crate::utils::naming::unraw_name;

use super::assemble::{BODY_CONVERSION, HEADERS_CONVERSION};
use super::partition::Partition;

/// Reject every declaration that is not a plain struct with named fields
pub fn validate(declaration: &Declaration) -> GenerationResult<()> {
    if declaration.kind != DeclarationKind::Struct {
        return Err(GenerationError::UnsupportedDeclarationKind {
            found: declaration.kind,
            span: declaration.span(),
        });
    }

    let mut seen = HashSet::new();
    for field in &declaration.fields {
        if !seen.insert(unraw_name(&field.name)) {
            return Err(GenerationError::DuplicateFieldName {
                field: field.name.to_string(),
                span: field.name.span(),
            });
        }
    }

    Ok(())
}

/// Check a partition against the names the expansion is about to introduce
pub fn validate_partition(
    declaration: &Declaration,
    partition: &Partition,
    config: &GeneratorConfig,
) -> GenerationResult<()> {
    let storage = [
        unraw_name(&config.headers_storage),
        unraw_name(&config.body_storage),
    ];
    for field in &declaration.fields {
        if storage.contains(&unraw_name(&field.name)) {
            return Err(GenerationError::ReservedFieldName {
                field: field.name.to_string(),
                purpose: "storage field",
                span: field.name.span(),
            });
        }
    }

    let constructor = unraw_name(&config.constructor);
    if [HEADERS_CONVERSION, BODY_CONVERSION].contains(&constructor.as_str()) {
        return Err(GenerationError::ReservedConstructorName {
            name: config.constructor.to_string(),
            purpose: "conversion method",
            span: config.constructor.span(),
        });
    }

    for field in partition.annotated() {
        let name = unraw_name(field.name());
        let purpose = if name == constructor {
            Some("constructor")
        } else if name == HEADERS_CONVERSION || name == BODY_CONVERSION {
            Some("conversion method")
        } else {
            None
        };
        if let Some(purpose) = purpose {
            return Err(GenerationError::ReservedFieldName {
                field: field.name().to_string(),
                purpose,
                span: field.name().span(),
            });
        }

        check_rename(field)?;
    }

    for role in [Role::Header, Role::Body] {
        let mut owners = HashMap::new();
        for field in partition.fields(role) {
            let key = field.effective_key();
            if let Some(first) = owners.insert(key.clone(), field.name().to_string()) {
                return Err(GenerationError::DuplicateSerializationKey {
                    role,
                    key,
                    first,
                    second: field.name().to_string(),
                    span: field.name().span(),
                });
            }
        }
    }

    Ok(())
}

/// The marker owns the key of an annotated field; a `serde(rename)` next to
/// it would be emitted twice.
fn check_rename(field: &ClassifiedField) -> GenerationResult<()> {
    for attr in field.field.attrs.iter().filter(|a| a.path().is_ident("serde")) {
        if let Some((meta, key)) = find_rename(attr) {
            let tag = field
                .field
                .markers
                .first()
                .map(|marker| marker.tag.to_string())
                .unwrap_or_else(|| field.role().to_string());
            return Err(GenerationError::ConflictingRename {
                field: field.name().to_string(),
                tag,
                key: key.unwrap_or_else(|| field.effective_key().to_string()),
                span: meta.span(),
            });
        }
    }
    Ok(())
}

/// The `rename` entry of a `serde` attribute and its string value, if any
fn find_rename(attr: &Attribute) -> Option<(Meta, Option<String>)> {
    let entries = attr
        .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
        .ok()?;
    let meta = entries
        .into_iter()
        .find(|meta| meta.path().is_ident("rename"))?;
    let key = match &meta {
        Meta::NameValue(MetaNameValue {
            value: Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }),
            ..
        }) => Some(lit.value()),
        _ => None,
    };
    Some((meta, key))
}
