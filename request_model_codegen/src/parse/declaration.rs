//! Declaration parsing using syn visitors
//!
//! This module turns the item handed to `#[request_model]` into a
//! [`Declaration`]. Unsupported shapes still produce a declaration (with the
//! matching [`DeclarationKind`]) so the validator can reject them with a
//! proper diagnostic.

use proc_macro2::Span;
use syn::{Fields, Ident, Item, ItemEnum, ItemStruct, ItemUnion, visit::Visit};

use super::attributes::{parse_derives, parse_marker};
use super::metadata::{Declaration, DeclarationKind, Field};
use crate::config::MarkerTable;

/// Visitor for parsing the annotated item
pub struct DeclarationVisitor<'a> {
    markers: &'a MarkerTable,

    /// Parsed declaration, set by the first item visited
    pub declaration: Option<Declaration>,

    errors: Vec<syn::Error>,
}

impl<'a> DeclarationVisitor<'a> {
    pub fn new(markers: &'a MarkerTable) -> Self {
        Self {
            markers,
            declaration: None,
            errors: Vec::new(),
        }
    }

    /// Parse a declaration from an item
    ///
    /// This is the main entry point used by the expansion.
    pub fn parse_declaration(item: &Item, markers: &MarkerTable) -> syn::Result<Declaration> {
        let mut visitor = DeclarationVisitor::new(markers);
        visitor.visit_item(item);

        let mut errors = visitor.errors.into_iter();
        if let Some(mut combined) = errors.next() {
            for error in errors {
                combined.combine(error);
            }
            return Err(combined);
        }

        visitor
            .declaration
            .ok_or_else(|| syn::Error::new_spanned(item, "Failed to parse declaration"))
    }

    fn parse_struct(&mut self, item: &ItemStruct) {
        let kind = match &item.fields {
            Fields::Named(_) if has_generics(&item.generics) => DeclarationKind::GenericStruct,
            Fields::Named(_) => DeclarationKind::Struct,
            Fields::Unnamed(_) => DeclarationKind::TupleStruct,
            Fields::Unit => DeclarationKind::UnitStruct,
        };

        let mut declaration = Declaration::new(item.ident.clone(), item.vis.clone(), kind);
        declaration.attrs = item.attrs.clone();
        match parse_derives(&item.attrs) {
            Ok(derives) => declaration.derives = derives,
            Err(e) => self.errors.push(e),
        }

        if let Fields::Named(fields) = &item.fields {
            for field in &fields.named {
                if let Some(parsed) = self.parse_field(field) {
                    declaration.add_field(parsed);
                }
            }
        }

        self.declaration = Some(declaration);
    }

    /// Parse a single named field, splitting markers from other attributes
    fn parse_field(&self, field: &syn::Field) -> Option<Field> {
        let name = field.ident.clone()?;
        let mut parsed = Field::new(name, field.ty.clone(), field.vis.clone());

        for attr in &field.attrs {
            match parse_marker(attr).filter(|_| self.markers.is_marker(attr)) {
                Some(marker) => parsed.markers.push(marker),
                None => parsed.attrs.push(attr.clone()),
            }
        }

        Some(parsed)
    }

    fn unsupported(&mut self, name: Ident, vis: syn::Visibility, kind: DeclarationKind) {
        self.declaration = Some(Declaration::new(name, vis, kind));
    }
}

impl<'ast> Visit<'ast> for DeclarationVisitor<'_> {
    fn visit_item(&mut self, item: &'ast Item) {
        if self.declaration.is_some() {
            return;
        }

        match item {
            Item::Struct(s) => self.visit_item_struct(s),
            Item::Enum(e) => self.visit_item_enum(e),
            Item::Union(u) => self.visit_item_union(u),
            other => {
                let name = item_ident(other)
                    .unwrap_or_else(|| Ident::new("item", Span::call_site()));
                self.unsupported(name, syn::Visibility::Inherited, DeclarationKind::Other);
            }
        }
    }

    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        self.parse_struct(item);
    }

    fn visit_item_enum(&mut self, item: &'ast ItemEnum) {
        self.unsupported(item.ident.clone(), item.vis.clone(), DeclarationKind::Enum);
    }

    fn visit_item_union(&mut self, item: &'ast ItemUnion) {
        self.unsupported(item.ident.clone(), item.vis.clone(), DeclarationKind::Union);
    }
}

fn has_generics(generics: &syn::Generics) -> bool {
    !generics.params.is_empty() || generics.where_clause.is_some()
}

fn item_ident(item: &Item) -> Option<Ident> {
    let ident = match item {
        Item::Fn(f) => &f.sig.ident,
        Item::Trait(t) => &t.ident,
        Item::Type(t) => &t.ident,
        Item::Mod(m) => &m.ident,
        Item::Const(c) => &c.ident,
        Item::Static(s) => &s.ident,
        Item::TraitAlias(t) => &t.ident,
        _ => return None,
    };
    Some(ident.clone())
}
