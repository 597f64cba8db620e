//! Declaration rewriting behind `#[request_model]`.
//!
//! This crate holds everything the attribute macro does, as plain functions
//! over `proc_macro2` tokens so it can be tested without a compiler plugin:
//!
//! - [`parse`] reads the annotated item into a [`parse::Declaration`]
//! - [`transform`] splits it into header and body groups and validates it
//! - [`generators`] renders the result
//!
//! ```
//! use quote::quote;
//!
//! let output = request_model_codegen::expand(
//!     quote!(),
//!     quote! {
//!         pub struct SendMessage {
//!             #[header("Authorization")]
//!             token: String,
//!             #[body]
//!             message: String,
//!         }
//!     },
//! );
//! assert!(output.to_string().contains("SendMessageHeaders"));
//! ```

pub mod config;
pub mod errors;
pub mod generators;
pub mod parse;
pub mod transform;
pub mod utils;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Item, visit_mut::VisitMut};

use crate::config::{GeneratorConfig, MarkerTable};
use crate::parse::{DeclarationVisitor, MarkerStripper};

/// Expand `#[request_model(args)]` applied to `item`.
///
/// Never fails: problems are reported as `compile_error!` invocations next
/// to the item with its markers removed, so one mistake yields one diagnostic.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let parsed = match syn::parse2::<Item>(item.clone()) {
        Ok(parsed) => parsed,
        Err(err) => {
            let mut tokens = err.to_compile_error();
            tokens.extend(item);
            return tokens;
        }
    };

    match GeneratorConfig::from_args(args) {
        Ok(config) => expand_with(&config, parsed),
        Err(err) => report(err, parsed, &MarkerTable::default()),
    }
}

/// Expand `item` under an already built configuration
pub fn expand_with(config: &GeneratorConfig, item: Item) -> TokenStream {
    match try_expand(config, &item) {
        Ok(tokens) => tokens,
        Err(err) => report(err, item, &config.markers),
    }
}

/// Fallible core of [`expand_with`]
pub fn try_expand(config: &GeneratorConfig, item: &Item) -> syn::Result<TokenStream> {
    let declaration = DeclarationVisitor::parse_declaration(item, &config.markers)?;
    let expansion = transform::transform(&declaration, config)?;
    Ok(generators::emit(&expansion, config))
}

fn report(err: syn::Error, mut item: Item, markers: &MarkerTable) -> TokenStream {
    MarkerStripper::new(markers).visit_item_mut(&mut item);
    let mut tokens = err.to_compile_error();
    item.to_tokens(&mut tokens);
    tokens
}
