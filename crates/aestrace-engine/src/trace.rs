//! Serializable per-round trace types.
//!
//! Field names and ordering reproduce the JSON the original visualizer
//! consumes: a `blocks` array of `{block, rounds}` objects and a
//! `finalResult` string, with checkpoint labels differing by direction.

use aes_core::Block;
use serde::Serialize;

/// Renders a state snapshot as uppercase hex, two digits per byte.
pub(crate) fn snapshot(state: &Block) -> String {
    hex::encode_upper(state)
}

/// State checkpoints for one forward (encryption) round.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardRound {
    /// Round number, 1-based.
    pub round: usize,
    /// State entering the round.
    pub start_of_round: String,
    /// State after SubBytes.
    pub after_sub_bytes: String,
    /// State after ShiftRows.
    pub after_shift_rows: String,
    /// State after MixColumns (unchanged on round 10, where the step is skipped).
    pub after_mix_columns: String,
    /// State after AddRoundKey.
    pub after_add_round_key: String,
}

/// State checkpoints for one reverse (decryption) display round.
///
/// Display round `r` consumes round key `10 - r`; key addition happens
/// before the column un-mix, matching the inverse pipeline order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InverseRound {
    /// Display round number, 1-based.
    pub round: usize,
    /// State entering the round.
    pub start_of_round: String,
    /// State after InvShiftRows.
    pub after_inv_shift_rows: String,
    /// State after InvSubBytes.
    pub after_inv_sub_bytes: String,
    /// State after AddRoundKey.
    pub after_add_round_key: String,
    /// State after InvMixColumns (unchanged on display round 10).
    pub after_inv_mix_columns: String,
}

/// One round's snapshots, in either pipeline direction.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RoundTrace {
    /// Encryption round checkpoints.
    Forward(ForwardRound),
    /// Decryption round checkpoints.
    Inverse(InverseRound),
}

impl RoundTrace {
    /// The round number this entry records.
    pub fn round(&self) -> usize {
        match self {
            Self::Forward(r) => r.round,
            Self::Inverse(r) => r.round,
        }
    }

    /// All five checkpoint hex strings, in emission order.
    pub fn checkpoints(&self) -> [&str; 5] {
        match self {
            Self::Forward(r) => [
                r.start_of_round.as_str(),
                r.after_sub_bytes.as_str(),
                r.after_shift_rows.as_str(),
                r.after_mix_columns.as_str(),
                r.after_add_round_key.as_str(),
            ],
            Self::Inverse(r) => [
                r.start_of_round.as_str(),
                r.after_inv_shift_rows.as_str(),
                r.after_inv_sub_bytes.as_str(),
                r.after_add_round_key.as_str(),
                r.after_inv_mix_columns.as_str(),
            ],
        }
    }
}

/// Trace of one 16-byte block: exactly 10 round entries.
#[derive(Clone, Debug, Serialize)]
pub struct BlockTrace {
    /// Block index within the message, 1-based.
    pub block: usize,
    /// The 10 round entries, in round order.
    pub rounds: Vec<RoundTrace>,
}

/// Complete report handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct TraceReport {
    /// Per-block traces, ordered by block index.
    pub blocks: Vec<BlockTrace>,
    /// Base64 ciphertext (encrypt) or recovered UTF-8 text (decrypt).
    #[serde(rename = "finalResult")]
    pub final_result: String,
}

/// Uniform JSON error object emitted when an operation fails.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorReport {
    /// Human-readable failure reason.
    pub error: String,
}
