//! Parsing infrastructure for request model expansion
//!
//! This module turns the `syn` item the attribute is applied to into the
//! typed metadata the transformation works on. Once parsing is done, no later
//! stage touches raw attributes or token streams except to echo them back.
//!
//! # Example Flow
//!
//! ```text
//! #[request_model] item
//!     ↓
//! DeclarationVisitor (struct shape, fields, derives)
//!     ↓
//! parse_marker (typed Marker per registered attribute)
//!     ↓
//! Declaration (complete parsed representation)
//!     ↓
//! transform (next phase)
//! ```

pub mod attributes;
pub mod declaration;
pub mod metadata;

// Re-export commonly used types
pub use attributes::{MarkerStripper, parse_derives, parse_marker};
pub use declaration::DeclarationVisitor;
pub use metadata::{
    ClassifiedField, Declaration, DeclarationKind, Field, Marker, MarkerArgument, Role,
    RoleMarker, SerializationKey, TypeDescriptor,
};
