//! # Request Model
//!
//! Split a request struct into a header group and a body group, each encoded
//! under its own serialization keys.
//!
//! ## Quick Start
//!
//! ```rust
//! use request_model::prelude::*;
//!
//! #[request_model]
//! #[derive(Debug, Clone)]
//! pub struct SendMessage {
//!     #[header("Authorization")]
//!     token: String,
//!     #[body]
//!     message: String,
//!     #[body("thread_id")]
//!     thread: u64,
//! }
//!
//! let request = SendMessage::new("Bearer abc".into(), "hello".into(), 7);
//! assert_eq!(request.message(), "hello");
//!
//! let headers = request.headers_dictionary();
//! assert_eq!(headers["Authorization"], "Bearer abc");
//!
//! let body = request.body_dictionary();
//! assert_eq!(body["message"], "hello");
//! assert_eq!(body["thread_id"], 7);
//! ```
//!
//! The conversions never fail: if a group cannot be encoded they return an
//! empty mapping and log a warning. Use the `try_` methods of
//! [`RequestModel`] to see the error instead.

pub mod config;
pub mod conversion;
pub mod errors;
pub mod prelude;
pub mod traits;

pub use conversion::{BodyMap, HeaderMap};
pub use errors::{ConversionError, ConversionResult};
pub use request_model_macros::request_model;
pub use traits::RequestModel;

#[doc(hidden)]
pub use request_model_deps::__private;
