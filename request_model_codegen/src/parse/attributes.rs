//! Attribute parsing for markers and derives

use syn::{
    Attribute, Expr, ExprLit, Lit, Meta, MetaList, Path, Token, punctuated::Punctuated,
    visit_mut::VisitMut,
};

use super::metadata::{Marker, MarkerArgument};
use crate::config::MarkerTable;

/// Read a marker attribute into its typed form.
///
/// Returns `None` for attributes whose path is not a single identifier.
/// The argument shape is never an error: only a leading string literal
/// counts as a key.
pub fn parse_marker(attr: &Attribute) -> Option<Marker> {
    let tag = attr.path().get_ident()?.clone();
    let argument = match &attr.meta {
        Meta::Path(_) => MarkerArgument::None,
        Meta::List(list) => first_argument(list),
        Meta::NameValue(_) => MarkerArgument::Other,
    };
    Some(Marker::new(tag, argument))
}

fn first_argument(list: &MetaList) -> MarkerArgument {
    match list.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
        Ok(args) => match args.first() {
            Some(Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            })) => MarkerArgument::StringLiteral(lit.value()),
            Some(_) => MarkerArgument::Other,
            None => MarkerArgument::None,
        },
        Err(_) => MarkerArgument::Other,
    }
}

/// Paths listed in every `#[derive(...)]` attribute
pub fn parse_derives(attrs: &[Attribute]) -> syn::Result<Vec<Path>> {
    let mut derives = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let paths = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        derives.extend(paths);
    }
    Ok(derives)
}

/// Removes registered markers from every field of an item
pub struct MarkerStripper<'a> {
    markers: &'a MarkerTable,
}

impl<'a> MarkerStripper<'a> {
    pub fn new(markers: &'a MarkerTable) -> Self {
        Self { markers }
    }
}

impl VisitMut for MarkerStripper<'_> {
    fn visit_field_mut(&mut self, field: &mut syn::Field) {
        field.attrs.retain(|attr| !self.markers.is_marker(attr));
        syn::visit_mut::visit_field_mut(self, field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn marker(attr: Attribute) -> Marker {
        parse_marker(&attr).unwrap()
    }

    #[test]
    fn test_bare_marker() {
        let m = marker(parse_quote!(#[header]));
        assert_eq!(m.tag.to_string(), "header");
        assert_eq!(m.argument, MarkerArgument::None);
    }

    #[test]
    fn test_string_literal_marker() {
        let m = marker(parse_quote!(#[header("Authorization")]));
        assert_eq!(
            m.argument,
            MarkerArgument::StringLiteral("Authorization".into())
        );
    }

    #[test]
    fn test_first_literal_wins() {
        let m = marker(parse_quote!(#[body("payload", "ignored")]));
        assert_eq!(m.argument, MarkerArgument::StringLiteral("payload".into()));
    }

    #[test]
    fn test_empty_string_is_still_a_key() {
        let m = marker(parse_quote!(#[body("")]));
        assert_eq!(m.argument, MarkerArgument::StringLiteral(String::new()));
    }

    #[test]
    fn test_other_shapes_are_permissive() {
        assert_eq!(
            marker(parse_quote!(#[header(Authorization)])).argument,
            MarkerArgument::Other
        );
        assert_eq!(marker(parse_quote!(#[header(42)])).argument, MarkerArgument::Other);
        assert_eq!(
            marker(parse_quote!(#[header = "Authorization"])).argument,
            MarkerArgument::Other
        );
        assert_eq!(
            marker(parse_quote!(#[header(key = "Authorization")])).argument,
            MarkerArgument::Other
        );
        assert_eq!(marker(parse_quote!(#[header()])).argument, MarkerArgument::None);
        assert_eq!(
            marker(parse_quote!(#[header(;;)])).argument,
            MarkerArgument::Other
        );
    }

    #[test]
    fn test_qualified_path_is_not_a_marker() {
        let attr: Attribute = parse_quote!(#[request_model::header]);
        assert!(parse_marker(&attr).is_none());
    }

    #[test]
    fn test_parse_derives() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[derive(Debug, Clone)]),
            parse_quote!(#[doc = " request"]),
            parse_quote!(#[derive(serde::Deserialize)]),
        ];
        let derives = parse_derives(&attrs).unwrap();
        assert_eq!(derives.len(), 3);
        assert!(derives[0].is_ident("Debug"));
        assert!(derives[1].is_ident("Clone"));
        assert_eq!(derives[2].segments.last().unwrap().ident, "Deserialize");
    }

    #[test]
    fn test_marker_stripper() {
        let mut item: syn::ItemStruct = parse_quote! {
            struct Request {
                #[header("Authorization")]
                #[doc = " token"]
                token: String,
                #[body]
                message: String,
            }
        };
        MarkerStripper::new(&MarkerTable::default()).visit_item_struct_mut(&mut item);
        let attrs: Vec<usize> = item.fields.iter().map(|f| f.attrs.len()).collect();
        assert_eq!(attrs, vec![1, 0]);
    }
}
