//! Error types for the engine boundary.

use aes_core::KeyLengthError;
use thiserror::Error;

/// Failures detected before any cipher computation runs.
///
/// Malformed PKCS7 padding is deliberately absent: the padding codec falls
/// back to returning its input unchanged instead of raising (see
/// [`crate::padding::unpad`]).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key is not exactly 16 bytes.
    #[error("key must be exactly 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },
    /// The decrypt path's input is not valid base64 or not block-aligned.
    #[error("invalid encoded input: {reason}")]
    InvalidEncodedInput {
        /// Why the input was rejected.
        reason: String,
    },
}

impl From<KeyLengthError> for CipherError {
    fn from(err: KeyLengthError) -> Self {
        Self::InvalidKeyLength { len: err.len }
    }
}
