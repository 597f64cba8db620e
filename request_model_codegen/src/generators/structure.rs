use proc_macro2::TokenStream;
use quote::quote;

use crate::transform::Expansion;

/// Emits the rewritten declaration.
///
/// Annotated fields are replaced by one storage field per group; plain fields
/// stay as written, after the storage fields.
pub struct StructureGenerator;

impl StructureGenerator {
    pub fn generate(expansion: &Expansion) -> TokenStream {
        let declaration = &expansion.declaration;
        let attrs = &declaration.attrs;
        let vis = &declaration.vis;
        let name = &declaration.name;
        let headers_storage = &expansion.storage.headers;
        let body_storage = &expansion.storage.body;
        let headers_type = &expansion.header_model.name;
        let body_type = &expansion.body_model.name;

        let plain = expansion.plain_fields.iter().map(|field| {
            let field_attrs = &field.attrs;
            let field_vis = &field.vis;
            let field_name = &field.name;
            let ty = &field.ty;
            quote! {
                #(#field_attrs)*
                #field_vis #field_name: #ty,
            }
        });

        quote! {
            #(#attrs)*
            #vis struct #name {
                #headers_storage: #headers_type,
                #body_storage: #body_type,
                #(#plain)*
            }
        }
    }
}
