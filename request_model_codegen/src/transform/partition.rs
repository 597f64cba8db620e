use crate::config::MarkerTable;
use crate::errors::{GenerationError, GenerationResult};
use crate::parse::metadata::{ClassifiedField, Declaration, Field, Role};

use super::classify::classify;

/// Fields of a declaration split by role, each list in declaration order
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub headers: Vec<ClassifiedField>,
    pub body: Vec<ClassifiedField>,

    /// Fields without any role marker
    pub plain: Vec<Field>,
}

impl Partition {
    pub fn fields(&self, role: Role) -> &[ClassifiedField] {
        match role {
            Role::Header => &self.headers,
            Role::Body => &self.body,
        }
    }

    /// All annotated fields, headers first
    pub fn annotated(&self) -> impl Iterator<Item = &ClassifiedField> {
        self.headers.iter().chain(self.body.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.body.is_empty()
    }
}

/// Split the fields of `declaration` into header, body and plain fields.
///
/// A field may carry at most one registered marker; two markers (of the same
/// role or not) fail with [`GenerationError::ConflictingFieldRole`].
pub fn partition(declaration: &Declaration, markers: &MarkerTable) -> GenerationResult<Partition> {
    let mut partition = Partition::default();

    for field in &declaration.fields {
        let mut recognized = field
            .markers
            .iter()
            .filter(|marker| markers.role_of(&marker.tag).is_some());
        if let (Some(first), Some(second)) = (recognized.next(), recognized.next()) {
            return Err(GenerationError::ConflictingFieldRole {
                field: field.name.to_string(),
                first: first.tag.to_string(),
                second: second.tag.to_string(),
                span: second.span(),
            });
        }

        match (
            classify(field, Role::Header, markers),
            classify(field, Role::Body, markers),
        ) {
            (Some(marker), None) => partition
                .headers
                .push(ClassifiedField::new(field.clone(), marker)),
            (None, Some(marker)) => partition.body.push(ClassifiedField::new(field.clone(), marker)),
            (None, None) => partition.plain.push(field.clone()),
            (Some(_), Some(_)) => {
                return Err(GenerationError::ConflictingFieldRole {
                    field: field.name.to_string(),
                    first: Role::Header.to_string(),
                    second: Role::Body.to_string(),
                    span: field.name.span(),
                });
            }
        }
    }

    Ok(partition)
}
