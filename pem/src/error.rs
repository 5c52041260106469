use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when locating or decoding a PEM block.
///
/// Every variant means the input is structurally malformed: the boundary
/// lines are missing or out of order, or the body is not base64.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary marker (e.g., `-----BEGIN PUBLIC KEY-----`)
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary marker after the opening one
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// The label in the boundary marker is not recognized
    #[error("invalid label: {0}")]
    InvalidLabel(String),

    /// The block is closed by an END line carrying another label
    #[error("label doesn't match")]
    LabelMissMatch,

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
