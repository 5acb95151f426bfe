//! Key types for AES-128.

use core::fmt;

use crate::block::Block;

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// AES-128 key wrapper. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = KeyLengthError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| KeyLengthError { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Error returned when a key slice is not exactly 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyLengthError {
    /// The offending length.
    pub len: usize,
}

impl fmt::Display for KeyLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key must be exactly {KEY_SIZE} bytes, got {}", self.len)
    }
}

impl std::error::Error for KeyLengthError {}

/// Expanded round keys for AES-128. Round key 0 is the cipher key itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
