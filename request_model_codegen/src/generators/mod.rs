//! Code generation for request models
//!
//! Every generator turns a piece of an [`Expansion`] into tokens. [`emit`]
//! puts them together in a fixed order:
//!
//! ```text
//! grouped models (headers, body)
//! rewritten struct
//! impl Name { accessors, headers_dictionary, body_dictionary, constructor }
//! impl RequestModel for Name
//! ```

pub mod accessors;
pub mod constructor;
pub mod conversions;
pub mod grouped_model;
pub mod structure;

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::GeneratorConfig;
use crate::transform::{Expansion, SynthesizedDeclaration};

pub use accessors::AccessorGenerator;
pub use constructor::ConstructorGenerator;
pub use conversions::ConversionGenerator;
pub use grouped_model::GroupedModelGenerator;
pub use structure::StructureGenerator;

/// Render a complete expansion
pub fn emit(expansion: &Expansion, config: &GeneratorConfig) -> TokenStream {
    let mut models = TokenStream::new();
    let mut methods = TokenStream::new();

    for declaration in expansion.declarations() {
        match declaration {
            SynthesizedDeclaration::HeaderModel(model) | SynthesizedDeclaration::BodyModel(model) => {
                models.extend(GroupedModelGenerator::generate(
                    model,
                    &expansion.declaration,
                    config,
                ));
            }
            SynthesizedDeclaration::Accessor(accessor) => {
                methods.extend(AccessorGenerator::generate(accessor, &expansion.storage));
            }
            SynthesizedDeclaration::HeadersConversion(routine)
            | SynthesizedDeclaration::BodyConversion(routine) => {
                methods.extend(ConversionGenerator::generate_method(routine, expansion, config));
            }
            SynthesizedDeclaration::Constructor(_) => {
                methods.extend(ConstructorGenerator::generate(expansion));
            }
        }
    }

    let name = &expansion.declaration.name;
    let structure = StructureGenerator::generate(expansion);
    let trait_impl = ConversionGenerator::generate_trait_impl(expansion, config);

    quote! {
        #models

        #structure

        #[allow(dead_code)]
        impl #name {
            #methods
        }

        #trait_impl
    }
}
