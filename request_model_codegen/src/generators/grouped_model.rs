use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

use crate::config::GeneratorConfig;
use crate::parse::metadata::Declaration;
use crate::transform::GroupedModel;
use crate::utils::{derives, naming};

/// Emits the record type backing one role
pub struct GroupedModelGenerator;

impl GroupedModelGenerator {
    /// Generate the grouped model struct.
    ///
    /// The record is always braced, so an empty group still serializes as
    /// an empty object. Every field is renamed to its serialization key.
    pub fn generate(model: &GroupedModel, declaration: &Declaration, config: &GeneratorConfig) -> TokenStream {
        let name = &model.name;
        let runtime = &config.runtime;
        let forwarded = derives::forwarded(&declaration.derives);
        let serde_crate = LitStr::new(
            &format!("{}::__private::serde", naming::path_string(runtime)),
            name.span(),
        );

        let fields = model.fields.iter().map(|field| {
            let field_name = &field.name;
            let ty = &field.ty;
            let attrs = &field.attrs;
            let key = field.key.as_str();
            quote! {
                #(#attrs)*
                #[serde(rename = #key)]
                #field_name: #ty,
            }
        });

        quote! {
            #[derive(#runtime::__private::serde::Serialize #(, #forwarded)*)]
            #[serde(crate = #serde_crate)]
            struct #name {
                #(#fields)*
            }
        }
    }
}
