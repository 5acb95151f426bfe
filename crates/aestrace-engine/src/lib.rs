//! Message-level AES-128 ECB engine with a verifiable per-round trace.
//!
//! Built on top of the `aes-core` primitives, this crate provides:
//! - PKCS7 padding with the original tool's lenient unpad policy.
//! - Per-block encryption/decryption that snapshots the state after every
//!   round sub-step.
//! - Serializable trace reports matching the original JSON field names.
//! - Boundary validation (key length, encoded-input well-formedness) so the
//!   cipher pipelines themselves stay total.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
pub mod padding;
mod trace;

pub use crate::engine::{decrypt, decrypt_base64, encrypt, CipherResult, Direction};
pub use crate::error::CipherError;
pub use crate::trace::{
    BlockTrace, ErrorReport, ForwardRound, InverseRound, RoundTrace, TraceReport,
};
