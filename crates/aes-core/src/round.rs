//! The four AES round transforms and their inverses.
//!
//! Every transform takes a state by reference and returns a fresh block, so
//! each pipeline step can be snapshotted without aliasing a reused buffer.

use crate::block::{xor_blocks, Block, BLOCK_SIZE};
use crate::gf;
use crate::sbox::{inv_sbox, sbox};

/// Replaces every state byte with its forward S-box entry.
#[inline]
pub fn sub_bytes(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for (o, &s) in out.iter_mut().zip(state.iter()) {
        *o = sbox(s);
    }
    out
}

/// Replaces every state byte with its inverse S-box entry.
#[inline]
pub fn inv_sub_bytes(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for (o, &s) in out.iter_mut().zip(state.iter()) {
        *o = inv_sbox(s);
    }
    out
}

/// Rotates row `i` of the column-major 4x4 matrix left by `i` positions.
pub fn shift_rows(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for row in 0..4 {
        for col in 0..4 {
            out[col * 4 + row] = state[((col + row) % 4) * 4 + row];
        }
    }
    out
}

/// Rotates row `i` right by `i` positions, undoing [`shift_rows`].
pub fn inv_shift_rows(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for row in 0..4 {
        for col in 0..4 {
            out[((col + row) % 4) * 4 + row] = state[col * 4 + row];
        }
    }
    out
}

/// Multiplies each column by the MDS matrix with rows cycling {2, 3, 1, 1}.
pub fn mix_columns(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for col in 0..4 {
        let idx = col * 4;
        let [s0, s1, s2, s3] = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        out[idx] = gf::mul(s0, 2) ^ gf::mul(s1, 3) ^ s2 ^ s3;
        out[idx + 1] = s0 ^ gf::mul(s1, 2) ^ gf::mul(s2, 3) ^ s3;
        out[idx + 2] = s0 ^ s1 ^ gf::mul(s2, 2) ^ gf::mul(s3, 3);
        out[idx + 3] = gf::mul(s0, 3) ^ s1 ^ s2 ^ gf::mul(s3, 2);
    }
    out
}

/// Multiplies each column by the inverse MDS matrix, rows cycling
/// {0x0e, 0x0b, 0x0d, 0x09}.
pub fn inv_mix_columns(state: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for col in 0..4 {
        let idx = col * 4;
        let [s0, s1, s2, s3] = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        out[idx] = gf::mul(s0, 0x0e) ^ gf::mul(s1, 0x0b) ^ gf::mul(s2, 0x0d) ^ gf::mul(s3, 0x09);
        out[idx + 1] =
            gf::mul(s0, 0x09) ^ gf::mul(s1, 0x0e) ^ gf::mul(s2, 0x0b) ^ gf::mul(s3, 0x0d);
        out[idx + 2] =
            gf::mul(s0, 0x0d) ^ gf::mul(s1, 0x09) ^ gf::mul(s2, 0x0e) ^ gf::mul(s3, 0x0b);
        out[idx + 3] =
            gf::mul(s0, 0x0b) ^ gf::mul(s1, 0x0d) ^ gf::mul(s2, 0x09) ^ gf::mul(s3, 0x0e);
    }
    out
}

/// XORs a round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &Block, round_key: &Block) -> Block {
    xor_blocks(state, round_key)
}
