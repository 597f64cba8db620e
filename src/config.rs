//! Runtime conversion configuration.
//!
//! Generated code builds a [`ConversionConfig`] from the `header_values`
//! argument of `#[request_model]`. It can also be built by hand when calling
//! the functions in [`crate::conversion`] directly.

use typed_builder::TypedBuilder;

/// How header values that are not strings are handled
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum HeaderValuePolicy {
    /// Any non-string value fails the conversion
    #[default]
    Strict,
    /// Numbers and booleans are rendered as strings and nulls are dropped.
    /// Arrays and objects still fail.
    Stringify,
}

/// Configuration for header and body conversions.
///
/// # Examples
///
/// ```
/// use request_model::config::{ConversionConfig, HeaderValuePolicy};
///
/// let config = ConversionConfig::builder()
///     .header_values(HeaderValuePolicy::Stringify)
///     .build();
/// assert_eq!(config, ConversionConfig::new(HeaderValuePolicy::Stringify));
/// assert_eq!(ConversionConfig::default().header_values, HeaderValuePolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct ConversionConfig {
    #[builder(default)]
    pub header_values: HeaderValuePolicy,
}

impl ConversionConfig {
    pub const fn new(header_values: HeaderValuePolicy) -> Self {
        Self { header_values }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
