//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built either from the arguments of
//! `#[request_model(...)]` or directly through its builder:
//!
//! ```
//! use quote::format_ident;
//! use request_model_codegen::config::{GeneratorConfig, HeaderValues};
//!
//! let config = GeneratorConfig::builder()
//!     .headers_type(format_ident!("AuthHeaders"))
//!     .header_values(HeaderValues::Stringify)
//!     .build();
//! assert_eq!(config.constructor, "new");
//! ```

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::format_ident;
use syn::{Attribute, Ident, LitStr, Path, parse::Parser, parse_quote};
use typed_builder::TypedBuilder;

use crate::parse::metadata::Role;

/// Registration table mapping marker attribute names to roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    entries: BTreeMap<String, Role>,
}

impl MarkerTable {
    /// A table with no markers registered
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `tag` as a marker for `role`, replacing any previous entry
    pub fn register(&mut self, tag: impl Into<String>, role: Role) -> &mut Self {
        self.entries.insert(tag.into(), role);
        self
    }

    pub fn role_of(&self, tag: &Ident) -> Option<Role> {
        self.entries.get(&tag.to_string()).copied()
    }

    /// Role registered for an attribute, if it is a single-segment marker
    pub fn role_of_attribute(&self, attr: &Attribute) -> Option<Role> {
        attr.path().get_ident().and_then(|ident| self.role_of(ident))
    }

    pub fn is_marker(&self, attr: &Attribute) -> bool {
        self.role_of_attribute(attr).is_some()
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register("header", Role::Header).register("body", Role::Body);
        table
    }
}

/// How the generated conversion treats non-string header values
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum HeaderValues {
    /// Any non-string header value fails the conversion
    #[default]
    Strict,
    /// Numbers and booleans are rendered as strings, nulls are dropped
    Stringify,
}

/// Configuration for one expansion
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct GeneratorConfig {
    /// Marker attributes recognized on fields
    #[builder(default)]
    pub markers: MarkerTable,

    /// Name of the header group type (defaults to `{Name}Headers`)
    #[builder(default, setter(strip_option))]
    pub headers_type: Option<Ident>,

    /// Name of the body group type (defaults to `{Name}Body`)
    #[builder(default, setter(strip_option))]
    pub body_type: Option<Ident>,

    /// Name of the generated constructor
    #[builder(default = format_ident!("new"))]
    pub constructor: Ident,

    /// Field holding the header group on the rewritten struct
    #[builder(default = format_ident!("headers"))]
    pub headers_storage: Ident,

    /// Field holding the body group on the rewritten struct
    #[builder(default = format_ident!("body"))]
    pub body_storage: Ident,

    /// Path of the runtime crate in generated code
    #[builder(default = parse_quote!(::request_model))]
    pub runtime: Path,

    #[builder(default)]
    pub header_values: HeaderValues,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    /// Parse the arguments of `#[request_model(...)]`
    ///
    /// Expected format:
    /// `#[request_model(headers = "Name", body = "Name", constructor = "new", header_values = "strict", crate = "::request_model")]`
    /// with every key optional.
    pub fn from_args(args: TokenStream) -> syn::Result<Self> {
        let mut config = Self::default();

        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("headers") {
                config.headers_type = Some(meta.value()?.parse::<LitStr>()?.parse()?);
            } else if meta.path.is_ident("body") {
                config.body_type = Some(meta.value()?.parse::<LitStr>()?.parse()?);
            } else if meta.path.is_ident("constructor") {
                config.constructor = meta.value()?.parse::<LitStr>()?.parse()?;
            } else if meta.path.is_ident("header_values") {
                let lit: LitStr = meta.value()?.parse()?;
                config.header_values = lit.value().parse().map_err(|_| {
                    syn::Error::new(
                        lit.span(),
                        format!(
                            "unknown header_values policy \"{}\", expected \"strict\" or \"stringify\"",
                            lit.value()
                        ),
                    )
                })?;
            } else if meta.path.is_ident("crate") {
                config.runtime = meta.value()?.parse::<LitStr>()?.parse()?;
            } else {
                return Err(meta.error(
                    "unsupported request_model argument, expected one of: headers, body, constructor, header_values, crate",
                ));
            }
            Ok(())
        });

        parser.parse2(args)?;
        Ok(config)
    }
}
