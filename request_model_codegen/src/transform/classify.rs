use crate::config::MarkerTable;
use crate::parse::metadata::{Field, MarkerArgument, Role, RoleMarker};

/// Find the marker on `field` registered for `role`.
///
/// The first matching marker wins. A leading string literal argument becomes
/// the explicit key; any other argument shape leaves the key unset.
pub fn classify(field: &Field, role: Role, markers: &MarkerTable) -> Option<RoleMarker> {
    field
        .markers
        .iter()
        .find(|marker| markers.role_of(&marker.tag) == Some(role))
        .map(|marker| RoleMarker {
            role,
            key: match &marker.argument {
                MarkerArgument::StringLiteral(key) => Some(key.clone()),
                MarkerArgument::None | MarkerArgument::Other => None,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::metadata::Marker;
    use proc_macro2::Span;
    use syn::{Ident, Visibility, parse_quote};

    fn ident(name: &str) -> Ident {
        Ident::new(name, Span::call_site())
    }

    fn field(markers: Vec<Marker>) -> Field {
        let mut f = Field::new(ident("token"), parse_quote!(String), Visibility::Inherited);
        f.markers = markers;
        f
    }

    #[test]
    fn test_header_with_key() {
        let f = field(vec![Marker::new(
            ident("header"),
            MarkerArgument::StringLiteral("Authorization".into()),
        )]);
        let table = MarkerTable::default();

        assert_eq!(
            classify(&f, Role::Header, &table),
            Some(RoleMarker {
                role: Role::Header,
                key: Some("Authorization".into())
            })
        );
        assert_eq!(classify(&f, Role::Body, &table), None);
    }

    #[test]
    fn test_other_argument_means_no_key() {
        let f = field(vec![Marker::new(ident("body"), MarkerArgument::Other)]);
        let marker = classify(&f, Role::Body, &MarkerTable::default()).unwrap();
        assert_eq!(marker.key, None);
    }

    #[test]
    fn test_unmarked_field() {
        let f = field(Vec::new());
        let table = MarkerTable::default();
        assert_eq!(classify(&f, Role::Header, &table), None);
        assert_eq!(classify(&f, Role::Body, &table), None);
    }

    #[test]
    fn test_unregistered_tag_is_ignored() {
        let f = field(vec![Marker::new(ident("query"), MarkerArgument::None)]);
        assert_eq!(classify(&f, Role::Header, &MarkerTable::default()), None);
    }

    #[test]
    fn test_custom_table() {
        let mut table = MarkerTable::empty();
        table.register("meta", Role::Header);
        let f = field(vec![Marker::new(ident("meta"), MarkerArgument::None)]);
        assert!(classify(&f, Role::Header, &table).is_some());
        assert!(classify(&f, Role::Header, &MarkerTable::default()).is_none());
    }
}
