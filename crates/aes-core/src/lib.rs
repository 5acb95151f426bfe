//! From-scratch AES-128 implementation used by the aestrace engine and CLI.
//!
//! This crate intentionally mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128.
//! - The four round transforms and their inverses as pure functions.
//! - GF(2^8) arithmetic backing MixColumns.
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{xor_blocks, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{Aes128Key, KeyLengthError, RoundKeys, KEY_SIZE};
pub use crate::sbox::{inv_sbox, sbox};
