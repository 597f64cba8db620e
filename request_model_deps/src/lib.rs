//! # Request Model Dependencies
//!
//! This crate provides hygienic re-exports of the dependencies referenced by
//! code that `#[request_model]` generates. Generated items name these paths
//! through `::request_model::__private`, so users never have to add `serde`
//! or `serde_json` to their own manifests to compile an expanded struct.
//!
//! This crate is an implementation detail and should not be used directly by end users.

pub mod __private {
    //! Private re-exports for macro hygiene. Do not use directly.

    /// Serialization framework, including the `Serialize` derive
    pub use serde;

    /// JSON encoding used by the header and body conversions
    pub use serde_json;
}

// Also provide direct access for convenience
pub use serde;
pub use serde_json;
