//! Error handling for key agreement operations

use thiserror::Error;

/// Error type for key agreement operations
///
/// Peer values that are well-formed but cryptographically invalid (degenerate
/// group elements, off-curve points) are *not* reported through this type:
/// validation is an expected outcome and is signaled through the `bool`
/// returned by `validate_peer_key`. This enum covers the failures a caller
/// cannot recover from within the current handshake attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The 4-character ZRTP public-key algorithm tag is unknown or malformed
    #[error("unsupported key agreement algorithm tag {tag:?}")]
    UnsupportedAlgorithm {
        /// The offending tag bytes as received
        tag: Vec<u8>,
    },

    /// Peer public value does not match the fixed wire width for the variant
    #[error("{context}: peer public value is {actual} bytes, expected {expected}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Peer public value could not be imported as a curve point
    #[error("{context}: peer public value is not a valid curve point")]
    InvalidPeerKey { context: &'static str },

    /// The secure random source failed to deliver entropy
    #[error("entropy source failure: {details}")]
    RandomSource { details: String },
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSource {
            details: err.to_string(),
        }
    }
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;
