//! Prelude module for convenient imports.
//!
//! ```rust
//! use request_model::prelude::*;
//! ```
//!
//! Brings in the attribute macro, the [`RequestModel`] trait, the dictionary
//! types and the conversion configuration.

pub use crate::config::{ConversionConfig, HeaderValuePolicy};
pub use crate::conversion::{BodyMap, HeaderMap};
pub use crate::errors::{ConversionError, ConversionResult};
pub use request_model_macros::request_model;
pub use crate::traits::RequestModel;
