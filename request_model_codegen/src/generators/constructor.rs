use proc_macro2::TokenStream;
use quote::quote;

use crate::transform::Expansion;

pub struct ConstructorGenerator;

impl ConstructorGenerator {
    /// Generate the constructor.
    ///
    /// Parameters are the header fields then the body fields, each in
    /// declaration order. Plain fields start from `Default::default()`.
    pub fn generate(expansion: &Expansion) -> TokenStream {
        let constructor = &expansion.constructor;
        let name = &constructor.name;
        let vis = &constructor.vis;

        let params = constructor.parameters().map(|param| {
            let param_name = &param.name;
            let ty = &param.ty;
            quote!(#param_name: #ty)
        });
        let header_names = constructor.header_params.iter().map(|p| &p.name);
        let body_names = constructor.body_params.iter().map(|p| &p.name);
        let defaulted = &constructor.defaulted;

        let headers_storage = &expansion.storage.headers;
        let body_storage = &expansion.storage.body;
        let headers_type = &expansion.header_model.name;
        let body_type = &expansion.body_model.name;

        quote! {
            #[allow(clippy::too_many_arguments)]
            #vis fn #name(#(#params),*) -> Self {
                Self {
                    #headers_storage: #headers_type { #(#header_names),* },
                    #body_storage: #body_type { #(#body_names),* },
                    #(#defaulted: ::core::default::Default::default(),)*
                }
            }
        }
    }
}
