use proc_macro2::TokenStream;
use quote::quote;

use crate::config::{GeneratorConfig, HeaderValues};
use crate::parse::metadata::Role;
use crate::transform::{ConversionRoutine, Expansion};

/// Emits the dictionary conversions.
///
/// The fallible conversions live in the runtime `RequestModel` impl; the
/// inherent methods forward to the trait's degrading defaults so callers
/// do not need the trait in scope.
pub struct ConversionGenerator;

impl ConversionGenerator {
    /// Inherent method for one conversion routine
    pub fn generate_method(
        routine: &ConversionRoutine,
        expansion: &Expansion,
        config: &GeneratorConfig,
    ) -> TokenStream {
        let runtime = &config.runtime;
        let vis = &expansion.declaration.vis;
        let name = &routine.name;
        let (output, doc) = match routine.role {
            Role::Header => (
                quote!(#runtime::HeaderMap),
                "Header fields keyed by their serialization key, empty if they cannot be encoded",
            ),
            Role::Body => (
                quote!(#runtime::BodyMap),
                "Body fields keyed by their serialization key, empty if they cannot be encoded",
            ),
        };

        quote! {
            #[doc = #doc]
            #vis fn #name(&self) -> #output {
                <Self as #runtime::RequestModel>::#name(self)
            }
        }
    }

    /// `RequestModel` impl for the rewritten declaration
    pub fn generate_trait_impl(expansion: &Expansion, config: &GeneratorConfig) -> TokenStream {
        let runtime = &config.runtime;
        let name = &expansion.declaration.name;
        let headers_storage = &expansion.storage.headers;
        let body_storage = &expansion.storage.body;
        let policy = match config.header_values {
            HeaderValues::Strict => quote!(Strict),
            HeaderValues::Stringify => quote!(Stringify),
        };

        quote! {
            impl #runtime::RequestModel for #name {
                fn try_headers_dictionary(
                    &self,
                ) -> #runtime::errors::ConversionResult<#runtime::HeaderMap> {
                    #runtime::conversion::try_headers_dictionary(
                        &self.#headers_storage,
                        &#runtime::config::ConversionConfig::new(
                            #runtime::config::HeaderValuePolicy::#policy,
                        ),
                    )
                }

                fn try_body_dictionary(
                    &self,
                ) -> #runtime::errors::ConversionResult<#runtime::BodyMap> {
                    #runtime::conversion::try_body_dictionary(&self.#body_storage)
                }
            }
        }
    }
}
