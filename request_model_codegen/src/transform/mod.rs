//! The declaration rewrite
//!
//! [`transform`] runs the stages in order:
//!
//! 1. [`validate`] - the declaration must be a struct with named fields
//! 2. [`partition`] - split fields into header, body and plain fields
//! 3. [`validate_partition`] - reject key and name collisions
//! 4. [`synthesize_grouped_model`] - one record per role
//! 5. [`synthesize_accessor`] - one accessor per annotated field
//! 6. [`assemble_conversions`] / [`assemble_constructor`]
//!
//! Nothing is produced unless every stage succeeds.

pub mod accessor;
pub mod assemble;
pub mod classify;
pub mod grouped;
pub mod partition;
pub mod validate;

use syn::Ident;

use crate::config::GeneratorConfig;
use crate::errors::GenerationResult;
use crate::parse::metadata::{Declaration, Field, Role};
use crate::utils::naming;

pub use accessor::{Accessor, synthesize_accessor};
pub use assemble::{
    ConversionRoutine, Constructor, Parameter, ValueKind, assemble_constructor,
    assemble_conversions,
};
pub use classify::classify;
pub use grouped::{GroupedField, GroupedModel, synthesize_grouped_model};
pub use partition::{Partition, partition};
pub use validate::{validate, validate_partition};

/// One synthesized output unit
#[derive(Debug, Clone, Copy)]
pub enum SynthesizedDeclaration<'a> {
    HeaderModel(&'a GroupedModel),
    BodyModel(&'a GroupedModel),
    Accessor(&'a Accessor),
    HeadersConversion(&'a ConversionRoutine),
    BodyConversion(&'a ConversionRoutine),
    Constructor(&'a Constructor),
}

/// Names of the fields holding each group on the rewritten struct
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub headers: Ident,
    pub body: Ident,
}

impl StorageLayout {
    pub fn field_for(&self, role: Role) -> &Ident {
        match role {
            Role::Header => &self.headers,
            Role::Body => &self.body,
        }
    }
}

/// Everything generated for one declaration
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The declaration as parsed
    pub declaration: Declaration,
    pub storage: StorageLayout,

    /// Fields left untouched on the rewritten struct
    pub plain_fields: Vec<Field>,

    pub header_model: GroupedModel,
    pub body_model: GroupedModel,
    pub accessors: Vec<Accessor>,
    pub headers_conversion: ConversionRoutine,
    pub body_conversion: ConversionRoutine,
    pub constructor: Constructor,
}

impl Expansion {
    /// Synthesized declarations in their stable output order
    pub fn declarations(&self) -> Vec<SynthesizedDeclaration<'_>> {
        let mut out = vec![
            SynthesizedDeclaration::HeaderModel(&self.header_model),
            SynthesizedDeclaration::BodyModel(&self.body_model),
        ];
        out.extend(self.accessors.iter().map(SynthesizedDeclaration::Accessor));
        out.push(SynthesizedDeclaration::HeadersConversion(
            &self.headers_conversion,
        ));
        out.push(SynthesizedDeclaration::BodyConversion(&self.body_conversion));
        out.push(SynthesizedDeclaration::Constructor(&self.constructor));
        out
    }

    pub fn model(&self, role: Role) -> &GroupedModel {
        match role {
            Role::Header => &self.header_model,
            Role::Body => &self.body_model,
        }
    }

    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.name == name)
    }
}

/// Rewrite `declaration` into its grouped models, accessors, conversions and
/// constructor.
pub fn transform(declaration: &Declaration, config: &GeneratorConfig) -> GenerationResult<Expansion> {
    validate(declaration)?;
    let partition = partition(declaration, &config.markers)?;
    validate_partition(declaration, &partition, config)?;

    let header_model = synthesize_grouped_model(
        naming::headers_type_name(&declaration.name, config),
        Role::Header,
        &partition.headers,
    );
    let body_model = synthesize_grouped_model(
        naming::body_type_name(&declaration.name, config),
        Role::Body,
        &partition.body,
    );

    // Accessors follow declaration order, not group order
    let accessors = declaration
        .fields
        .iter()
        .filter_map(|field| {
            partition
                .annotated()
                .find(|classified| classified.field.name == field.name)
        })
        .map(|classified| synthesize_accessor(classified, classified.role()))
        .collect();

    let (headers_conversion, body_conversion) = assemble_conversions();
    let constructor = assemble_constructor(
        config.constructor.clone(),
        declaration.vis.clone(),
        &partition,
    );

    Ok(Expansion {
        declaration: declaration.clone(),
        storage: StorageLayout {
            headers: config.headers_storage.clone(),
            body: config.body_storage.clone(),
        },
        plain_fields: partition.plain,
        header_model,
        body_model,
        accessors,
        headers_conversion,
        body_conversion,
        constructor,
    })
}
