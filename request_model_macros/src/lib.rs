use proc_macro::TokenStream;

/// Splits a struct's fields into a header group and a body group.
///
/// Applied to a struct with named fields, this macro generates:
/// - `{Name}Headers`: a serializable record holding every `#[header]` field
/// - `{Name}Body`: a serializable record holding every `#[body]` field
/// - a rewritten `{Name}` storing both groups in its `headers` and `body` fields
/// - a by-reference accessor for every annotated field
/// - a constructor `new(header fields..., body fields...)`
/// - `headers_dictionary()` and `body_dictionary()`, plus an implementation
///   of `RequestModel`
///
/// # Field Attributes
///
/// - `#[header]` / `#[header("Key")]` - the field goes to the header group,
///   serialized under its own name or under `"Key"`
/// - `#[body]` / `#[body("Key")]` - the same for the body group
///
/// Only a string literal as the first argument counts as a key. Fields
/// without a marker stay on the struct and start from `Default::default()`
/// in the constructor.
///
/// # Arguments
///
/// - `headers = "Name"` / `body = "Name"` - group type names
/// - `constructor = "name"` - constructor name, `new` by default
/// - `header_values = "strict" | "stringify"` - how non-string header values
///   are handled, `strict` by default
/// - `crate = "path"` - path to the runtime crate when it is re-exported
///
/// Place `#[request_model]` above any `#[derive(...)]` so derives see the
/// rewritten struct.
///
/// # Example
///
/// ```ignore
/// use request_model::request_model;
///
/// #[request_model]
/// #[derive(Debug)]
/// pub struct SendMessage {
///     #[header("Authorization")]
///     token: String,
///     #[body]
///     message: String,
/// }
///
/// let request = SendMessage::new("Bearer abc".into(), "hello".into());
/// assert_eq!(request.token(), "Bearer abc");
/// assert_eq!(request.headers_dictionary()["Authorization"], "Bearer abc");
/// assert_eq!(request.body_dictionary()["message"], "hello");
/// ```
///
/// # Errors
///
/// Anything but a non-generic struct with named fields, a field carrying two
/// markers, or two fields sharing a key in the same group is a compile error.
#[proc_macro_attribute]
pub fn request_model(args: TokenStream, item: TokenStream) -> TokenStream {
    request_model_codegen::expand(
        proc_macro2::TokenStream::from(args),
        proc_macro2::TokenStream::from(item),
    )
    .into()
}
