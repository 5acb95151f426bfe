//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, interpreted as a 4x4 matrix in column-major
/// order (byte index `col * 4 + row`).
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, returning the result as a fresh block.
#[inline]
pub fn xor_blocks(lhs: &Block, rhs: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for (o, (l, r)) in out.iter_mut().zip(lhs.iter().zip(rhs.iter())) {
        *o = l ^ r;
    }
    out
}
