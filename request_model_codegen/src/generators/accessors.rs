use proc_macro2::TokenStream;
use quote::quote;

use crate::transform::{Accessor, StorageLayout};

pub struct AccessorGenerator;

impl AccessorGenerator {
    /// Generate a by-reference getter reading through the owning group
    pub fn generate(accessor: &Accessor, storage: &StorageLayout) -> TokenStream {
        let docs = &accessor.docs;
        let vis = &accessor.vis;
        let name = &accessor.name;
        let ty = &accessor.ty;
        let group = storage.field_for(accessor.owner);

        quote! {
            #(#docs)*
            #[inline]
            #vis fn #name(&self) -> &#ty {
                &self.#group.#name
            }
        }
    }
}
