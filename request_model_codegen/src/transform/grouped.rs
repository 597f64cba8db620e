use syn::{Attribute, Ident};

use crate::parse::metadata::{ClassifiedField, Role, SerializationKey, TypeDescriptor};

/// A field of a grouped model
#[derive(Debug, Clone)]
pub struct GroupedField {
    pub name: Ident,
    pub ty: TypeDescriptor,
    pub key: SerializationKey,

    /// Non-doc attributes carried over from the source field
    pub attrs: Vec<Attribute>,
}

/// Synthesized record holding every field of one role
#[derive(Debug, Clone)]
pub struct GroupedModel {
    pub name: Ident,
    pub role: Role,
    pub fields: Vec<GroupedField>,
}

impl GroupedModel {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field name to serialization key, in field order
    pub fn key_mapping(&self) -> Vec<(String, SerializationKey)> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.key.clone()))
            .collect()
    }

    pub fn key_for(&self, field: &str) -> Option<&SerializationKey> {
        self.fields.iter().find(|f| f.name == field).map(|f| &f.key)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.key_for(field).is_some()
    }
}

/// Build the grouped model for one role.
///
/// No type checking happens here: declared types are copied as-is and any
/// serialization problem surfaces when the generated code is compiled or run.
pub fn synthesize_grouped_model(name: Ident, role: Role, fields: &[ClassifiedField]) -> GroupedModel {
    let fields = fields
        .iter()
        .map(|classified| GroupedField {
            name: classified.field.name.clone(),
            ty: classified.field.ty.clone(),
            key: classified.effective_key(),
            attrs: classified.field.non_doc_attrs().cloned().collect(),
        })
        .collect();

    GroupedModel { name, role, fields }
}
