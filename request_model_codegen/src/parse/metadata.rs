//! Metadata structures for parsed request model declarations
//!
//! These structures hold everything extracted from the annotated item. They
//! are the interface between the `syn` front-end and the transformation: once
//! a [`Declaration`] exists, no stage looks at raw attributes again.

use std::fmt;

use derive_more::{Display, From, Into};
use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{Attribute, Ident, Path, Type, Visibility, ext::IdentExt};

/// The shape of the annotated item
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum DeclarationKind {
    /// A struct with named fields, the only supported shape
    #[strum(to_string = "struct")]
    Struct,
    #[strum(to_string = "generic struct")]
    GenericStruct,
    #[strum(to_string = "tuple struct")]
    TupleStruct,
    #[strum(to_string = "unit struct")]
    UnitStruct,
    #[strum(to_string = "enum")]
    Enum,
    #[strum(to_string = "union")]
    Union,
    #[strum(to_string = "item")]
    Other,
}

/// Complete metadata for one annotated item
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Item identifier (e.g., "StartRequest")
    pub name: Ident,

    /// Visibility (pub, pub(crate), etc.)
    pub vis: Visibility,

    pub kind: DeclarationKind,

    /// Non-marker attributes, re-emitted on the rewritten struct
    pub attrs: Vec<Attribute>,

    /// Paths listed in `#[derive(...)]` attributes
    pub derives: Vec<Path>,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Declaration {
    /// Create a new declaration without fields
    pub fn new(name: Ident, vis: Visibility, kind: DeclarationKind) -> Self {
        Self {
            name,
            vis,
            kind,
            attrs: Vec::new(),
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a field to this declaration
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn span(&self) -> Span {
        self.name.span()
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Declared type of a field.
///
/// Carried through every stage untouched and echoed verbatim into the
/// generated code; nothing in the generator inspects it.
#[derive(Debug, Clone)]
pub struct TypeDescriptor(Type);

impl TypeDescriptor {
    pub fn new(ty: Type) -> Self {
        Self(ty)
    }

    pub fn as_type(&self) -> &Type {
        &self.0
    }

    /// Token text of the type, as written
    pub fn text(&self) -> String {
        self.0.to_token_stream().to_string()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl ToTokens for TypeDescriptor {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.0.to_tokens(tokens);
    }
}

/// Metadata for a single named field
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name (e.g., "token")
    pub name: Ident,

    pub ty: TypeDescriptor,

    pub vis: Visibility,

    /// Role markers in the order they were written
    pub markers: Vec<Marker>,

    /// Every other attribute on the field
    pub attrs: Vec<Attribute>,
}

impl Field {
    /// Create a new field without markers or attributes
    pub fn new(name: Ident, ty: Type, vis: Visibility) -> Self {
        Self {
            name,
            ty: TypeDescriptor::new(ty),
            vis,
            markers: Vec::new(),
            attrs: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Doc comments on the field
    pub fn docs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter().filter(|a| a.path().is_ident("doc"))
    }

    /// Attributes other than doc comments
    pub fn non_doc_attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter().filter(|a| !a.path().is_ident("doc"))
    }
}

/// A marker attribute such as `#[header]` or `#[body("payload")]`
#[derive(Debug, Clone)]
pub struct Marker {
    /// Attribute name as written
    pub tag: Ident,

    pub argument: MarkerArgument,
}

impl Marker {
    pub fn new(tag: Ident, argument: MarkerArgument) -> Self {
        Self { tag, argument }
    }

    pub fn span(&self) -> Span {
        self.tag.span()
    }
}

/// Shape of a marker's first argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerArgument {
    /// `#[header]` or `#[header()]`
    None,
    /// `#[header("Authorization")]`
    StringLiteral(String),
    /// Anything else; treated like no argument
    Other,
}

/// Role a marker assigns to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Header,
    Body,
}

/// External key a field is encoded under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("{_0}")]
pub struct SerializationKey(String);

impl SerializationKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The field's name as a key, without any `r#` prefix
impl From<&Ident> for SerializationKey {
    fn from(ident: &Ident) -> Self {
        Self(ident.unraw().to_string())
    }
}

/// A role marker after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMarker {
    pub role: Role,

    /// Key given in the marker, if any
    pub key: Option<String>,
}

/// A field paired with the role marker that claimed it
#[derive(Debug, Clone)]
pub struct ClassifiedField {
    pub field: Field,
    pub marker: RoleMarker,
}

impl ClassifiedField {
    pub fn new(field: Field, marker: RoleMarker) -> Self {
        Self { field, marker }
    }

    pub fn name(&self) -> &Ident {
        &self.field.name
    }

    pub fn role(&self) -> Role {
        self.marker.role
    }

    /// Explicit key if one was given, else the field name
    pub fn effective_key(&self) -> SerializationKey {
        match &self.marker.key {
            Some(key) => SerializationKey::from(key.clone()),
            None => SerializationKey::from(&self.field.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn field(name: &str) -> Field {
        Field::new(
            Ident::new(name, Span::call_site()),
            parse_quote!(String),
            Visibility::Inherited,
        )
    }

    #[test]
    fn test_effective_key_prefers_explicit_key() {
        let classified = ClassifiedField::new(
            field("token"),
            RoleMarker {
                role: Role::Header,
                key: Some("Authorization".into()),
            },
        );
        assert_eq!(classified.effective_key().as_str(), "Authorization");
    }

    #[test]
    fn test_effective_key_falls_back_to_field_name() {
        let classified = ClassifiedField::new(
            field("message"),
            RoleMarker {
                role: Role::Body,
                key: None,
            },
        );
        assert_eq!(classified.effective_key().as_str(), "message");
    }

    #[test]
    fn test_raw_field_name_key_has_no_prefix() {
        let classified = ClassifiedField::new(
            Field::new(parse_quote!(r#type), parse_quote!(String), Visibility::Inherited),
            RoleMarker {
                role: Role::Body,
                key: None,
            },
        );
        assert_eq!(classified.name(), "r#type");
        assert_eq!(classified.effective_key().as_str(), "type");
    }

    #[test]
    fn test_type_descriptor_is_echoed_verbatim() {
        let ty = TypeDescriptor::new(parse_quote!(Option<Vec<u8>>));
        assert_eq!(ty.text().replace(' ', ""), "Option<Vec<u8>>");
        assert_eq!(ty, TypeDescriptor::new(parse_quote!(Option<Vec<u8>>)));
    }

    #[test]
    fn test_field_doc_split() {
        let mut f = field("token");
        f.attrs.push(parse_quote!(#[doc = " Bearer token"]));
        f.attrs.push(parse_quote!(#[serde(skip_serializing_if = "String::is_empty")]));
        assert_eq!(f.docs().count(), 1);
        assert_eq!(f.non_doc_attrs().count(), 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DeclarationKind::Enum.to_string(), "enum");
        assert_eq!(DeclarationKind::TupleStruct.to_string(), "tuple struct");
        assert_eq!(Role::Header.to_string(), "header");
    }
}
