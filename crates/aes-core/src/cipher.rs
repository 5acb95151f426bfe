//! AES-128 key schedule and single-block encryption/decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `r` depends only on round key `r - 1` and `RCON[r - 1]`: the
/// last column of the previous key is rotated, substituted, and folded into
/// the first word, and each following word chains from the one before it.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; BLOCK_SIZE]; 11];
    round_keys[0] = key.0;

    for round in 1..=10 {
        let prev = round_keys[round - 1];
        let mut next = [0u8; BLOCK_SIZE];

        // RotWord + SubWord on the previous key's last column.
        let mut temp = [sbox(prev[13]), sbox(prev[14]), sbox(prev[15]), sbox(prev[12])];
        temp[0] ^= RCON[round - 1];

        for i in 0..4 {
            next[i] = prev[i] ^ temp[i];
        }
        for i in 4..BLOCK_SIZE {
            next[i] = prev[i] ^ next[i - 4];
        }

        round_keys[round] = next;
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(block, round_keys.get(0));

    for round in 1..=10 {
        state = sub_bytes(&state);
        state = shift_rows(&state);
        if round < 10 {
            state = mix_columns(&state);
        }
        state = add_round_key(&state, round_keys.get(round));
    }

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(block, round_keys.get(10));

    for round in (0..10).rev() {
        state = inv_shift_rows(&state);
        state = inv_sub_bytes(&state);
        state = add_round_key(&state, round_keys.get(round));
        if round > 0 {
            state = inv_mix_columns(&state);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn round_key_zero_is_the_cipher_key() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        assert_eq!(*round_keys.get(0), NIST_KEY);
    }

    #[test]
    fn schedule_matches_fips_appendix_a() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let expected_rk1: [u8; 16] = [
            0xd6, 0xaa, 0x74, 0xfd, 0xd2, 0xaf, 0x72, 0xfa, 0xda, 0xa6, 0x78, 0xf1, 0xd6, 0xab,
            0x76, 0xfe,
        ];
        let expected_rk10: [u8; 16] = [
            0x13, 0x11, 0x1d, 0x7f, 0xe3, 0x94, 0x4a, 0x17, 0xf3, 0x07, 0xa7, 0x8b, 0x4d, 0x2b,
            0x30, 0xc5,
        ];
        assert_eq!(*round_keys.get(1), expected_rk1);
        assert_eq!(*round_keys.get(10), expected_rk10);
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
