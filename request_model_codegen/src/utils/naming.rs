use heck::ToUpperCamelCase;
use quote::format_ident;
use syn::{Ident, Path, ext::IdentExt};

use crate::config::GeneratorConfig;

/// Utilities for naming the items an expansion introduces

/// Header group type name (e.g., SendMessage -> SendMessageHeaders)
pub fn headers_type_name(declaration: &Ident, config: &GeneratorConfig) -> Ident {
    match &config.headers_type {
        Some(name) => name.clone(),
        None => suffixed(declaration, &config.headers_storage),
    }
}

/// Body group type name (e.g., SendMessage -> SendMessageBody)
pub fn body_type_name(declaration: &Ident, config: &GeneratorConfig) -> Ident {
    match &config.body_type {
        Some(name) => name.clone(),
        None => suffixed(declaration, &config.body_storage),
    }
}

/// Name as written in source, without any `r#` prefix
pub fn unraw_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Render a path without token spacing (e.g., `::request_model::__private`)
pub fn path_string(path: &Path) -> String {
    let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

fn suffixed(declaration: &Ident, storage: &Ident) -> Ident {
    format_ident!("{}{}", declaration, unraw_name(storage).to_upper_camel_case())
}
