use crate::conversion::{self, BodyMap, Group, HeaderMap};
use crate::errors::ConversionResult;

/// A struct split into a header group and a body group.
///
/// Implemented by `#[request_model]`. Only the fallible conversions are
/// generated; the plain ones degrade to an empty mapping on failure.
pub trait RequestModel {
    /// Header group as a string dictionary
    fn try_headers_dictionary(&self) -> ConversionResult<HeaderMap>;

    /// Body group as a JSON object
    fn try_body_dictionary(&self) -> ConversionResult<BodyMap>;

    /// Header group as a string dictionary, empty if it cannot be encoded
    fn headers_dictionary(&self) -> HeaderMap {
        conversion::degrade(Group::Headers, self.try_headers_dictionary())
    }

    /// Body group as a JSON object, empty if it cannot be encoded
    fn body_dictionary(&self) -> BodyMap {
        conversion::degrade(Group::Body, self.try_body_dictionary())
    }
}
