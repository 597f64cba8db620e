use proc_macro2::Span;
use syn::{Ident, Visibility};

use crate::parse::metadata::{Field, Role, TypeDescriptor};

use super::partition::Partition;

/// Value type a conversion routine produces for each key
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    /// Every value must be a string
    #[strum(to_string = "string")]
    String,
    /// Any serializable value
    #[strum(to_string = "json value")]
    Json,
}

/// Name of the generated header conversion method
pub const HEADERS_CONVERSION: &str = "headers_dictionary";

/// Name of the generated body conversion method
pub const BODY_CONVERSION: &str = "body_dictionary";

/// Routine converting one grouped model into a key to value mapping
#[derive(Debug, Clone)]
pub struct ConversionRoutine {
    pub role: Role,
    pub name: Ident,
    pub value_kind: ValueKind,
}

/// Build the headers and body conversion routines
pub fn assemble_conversions() -> (ConversionRoutine, ConversionRoutine) {
    (
        ConversionRoutine {
            role: Role::Header,
            name: Ident::new(HEADERS_CONVERSION, Span::call_site()),
            value_kind: ValueKind::String,
        },
        ConversionRoutine {
            role: Role::Body,
            name: Ident::new(BODY_CONVERSION, Span::call_site()),
            value_kind: ValueKind::Json,
        },
    )
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: Ident,
    pub ty: TypeDescriptor,
}

/// Constructor taking every annotated field and building both groups
#[derive(Debug, Clone)]
pub struct Constructor {
    pub name: Ident,
    pub vis: Visibility,
    pub header_params: Vec<Parameter>,
    pub body_params: Vec<Parameter>,

    /// Plain fields, initialized with `Default::default()`
    pub defaulted: Vec<Ident>,
}

impl Constructor {
    /// Parameters in signature order: header fields, then body fields
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.header_params.iter().chain(self.body_params.iter())
    }

    pub fn arity(&self) -> usize {
        self.header_params.len() + self.body_params.len()
    }
}

/// Build the constructor for a partitioned declaration
pub fn assemble_constructor(name: Ident, vis: Visibility, partition: &Partition) -> Constructor {
    let params = |role: Role| -> Vec<Parameter> {
        partition
            .fields(role)
            .iter()
            .map(|f| Parameter {
                name: f.field.name.clone(),
                ty: f.field.ty.clone(),
            })
            .collect()
    };

    Constructor {
        name,
        vis,
        header_params: params(Role::Header),
        body_params: params(Role::Body),
        defaulted: partition.plain.iter().map(|f: &Field| f.name.clone()).collect(),
    }
}
