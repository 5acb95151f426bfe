//! PKCS7 padding codec.

use aes_core::BLOCK_SIZE;

/// Appends PKCS7 padding: `n = 16 - (len mod 16)` bytes, each of value `n`.
///
/// An input whose length is already a multiple of 16 gains a full extra
/// block of value 16, so `unpad` can always recover the original length.
pub fn pad(bytes: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - bytes.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(bytes.len() + pad_len);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + pad_len, pad_len as u8);
    padded
}

/// Strips a valid PKCS7 trailer, or returns the input unchanged.
///
/// The trailer is valid when the final byte `n` is in `1..=16` and the last
/// `n` bytes all equal `n`. On malformed input this returns the bytes as-is
/// rather than raising; callers that need strict validation must check the
/// result length themselves. This lenient policy is a preserved contract of
/// the original tool, not an oversight.
pub fn unpad(bytes: &[u8]) -> &[u8] {
    let Some(&last) = bytes.last() else {
        return bytes;
    };
    let n = last as usize;
    if n == 0 || n > BLOCK_SIZE || n > bytes.len() {
        return bytes;
    }
    if bytes[bytes.len() - n..].iter().all(|&b| b == last) {
        &bytes[..bytes.len() - n]
    } else {
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_pads_to_one_block() {
        let padded = pad(b"HELLO");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..5], b"HELLO");
        assert!(padded[5..].iter().all(|&b| b == 11));
    }

    #[test]
    fn aligned_input_gains_a_full_block() {
        let padded = pad(&[0x42; 16]);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn empty_input_pads_to_one_block_of_sixteens() {
        let padded = pad(&[]);
        assert_eq!(padded, vec![16u8; 16]);
    }

    #[test]
    fn unpad_reverses_pad() {
        for len in 0..48 {
            let message: Vec<u8> = (0..len as u8).collect();
            assert_eq!(unpad(&pad(&message)), message.as_slice());
        }
    }

    #[test]
    fn corrupted_trailer_is_returned_unchanged() {
        let mut padded = pad(b"HELLO");
        padded[15] = 0x0c; // claims 12 pad bytes, but they hold 0x0b
        assert_eq!(unpad(&padded), padded.as_slice());
    }

    #[test]
    fn out_of_range_trailer_is_returned_unchanged() {
        let mut block = [0x0bu8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), block.as_slice());
        block[15] = 17;
        assert_eq!(unpad(&block), block.as_slice());
    }

    #[test]
    fn trailer_longer_than_input_is_returned_unchanged() {
        let bytes = [5u8, 9];
        assert_eq!(unpad(&bytes), bytes.as_slice());
    }
}
