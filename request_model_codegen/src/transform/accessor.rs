use syn::{Attribute, Ident, Visibility};

use crate::parse::metadata::{ClassifiedField, Role, TypeDescriptor};

/// Read accessor forwarding to a field of a grouped model
#[derive(Debug, Clone)]
pub struct Accessor {
    pub name: Ident,
    pub ty: TypeDescriptor,
    pub vis: Visibility,

    /// Group the value is read from
    pub owner: Role,

    /// Doc comments of the source field
    pub docs: Vec<Attribute>,
}

/// Build the accessor for an annotated field stored in the `owner` group.
///
/// The accessor keeps the field's name, type and visibility; it is the only
/// read path left once the field moves into its grouped model.
pub fn synthesize_accessor(field: &ClassifiedField, owner: Role) -> Accessor {
    Accessor {
        name: field.field.name.clone(),
        ty: field.field.ty.clone(),
        vis: field.field.vis.clone(),
        owner,
        docs: field.field.docs().cloned().collect(),
    }
}
