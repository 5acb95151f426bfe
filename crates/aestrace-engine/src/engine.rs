//! Message-level encryption and decryption with per-round tracing.

use aes_core::{expand_key, round, Aes128Key, Block, RoundKeys, BLOCK_SIZE};

use crate::error::CipherError;
use crate::padding;
use crate::trace::{snapshot, BlockTrace, ForwardRound, InverseRound, RoundTrace, TraceReport};

/// Pipeline direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Output of one engine invocation: the transformed bytes plus the full
/// per-block round trace, ordered by block index.
#[derive(Clone, Debug)]
pub struct CipherResult {
    /// Ciphertext (encrypt) or recovered plaintext after unpadding (decrypt).
    pub output: Vec<u8>,
    /// One trace entry per processed block, each holding 10 rounds.
    pub blocks: Vec<BlockTrace>,
    /// Which pipeline produced this result.
    pub direction: Direction,
}

impl CipherResult {
    /// Renders the final result the way the presentation layer shows it:
    /// base64 for ciphertext, UTF-8 (invalid sequences replaced) for
    /// recovered plaintext.
    pub fn final_result(&self) -> String {
        match self.direction {
            Direction::Encrypt => base64::encode(&self.output),
            Direction::Decrypt => String::from_utf8_lossy(&self.output).into_owned(),
        }
    }

    /// Converts the result into a serializable report.
    pub fn into_report(self) -> TraceReport {
        let final_result = self.final_result();
        TraceReport {
            blocks: self.blocks,
            final_result,
        }
    }
}

/// Encrypts a message under AES-128 ECB with PKCS7 padding.
///
/// The key must be exactly 16 bytes; nothing is computed otherwise.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<CipherResult, CipherError> {
    let key = Aes128Key::try_from(key)?;
    let round_keys = expand_key(&key);

    let padded = padding::pad(plaintext);
    let mut output = Vec::with_capacity(padded.len());
    let mut blocks = Vec::with_capacity(padded.len() / BLOCK_SIZE);

    for (index, chunk) in padded.chunks_exact(BLOCK_SIZE).enumerate() {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        let (cipher_block, rounds) = encrypt_block_traced(&block, &round_keys);
        output.extend_from_slice(&cipher_block);
        blocks.push(BlockTrace {
            block: index + 1,
            rounds,
        });
    }

    Ok(CipherResult {
        output,
        blocks,
        direction: Direction::Encrypt,
    })
}

/// Decrypts raw ciphertext bytes, stripping PKCS7 padding at the end.
///
/// The ciphertext must be a whole number of 16-byte blocks.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<CipherResult, CipherError> {
    let key = Aes128Key::try_from(key)?;
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidEncodedInput {
            reason: format!(
                "ciphertext length {} is not a multiple of {BLOCK_SIZE}",
                ciphertext.len()
            ),
        });
    }
    let round_keys = expand_key(&key);

    let mut recovered = Vec::with_capacity(ciphertext.len());
    let mut blocks = Vec::with_capacity(ciphertext.len() / BLOCK_SIZE);

    for (index, chunk) in ciphertext.chunks_exact(BLOCK_SIZE).enumerate() {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        let (plain_block, rounds) = decrypt_block_traced(&block, &round_keys);
        recovered.extend_from_slice(&plain_block);
        blocks.push(BlockTrace {
            block: index + 1,
            rounds,
        });
    }

    let output = padding::unpad(&recovered).to_vec();
    Ok(CipherResult {
        output,
        blocks,
        direction: Direction::Decrypt,
    })
}

/// Decodes base64 ciphertext and decrypts it.
pub fn decrypt_base64(key: &[u8], encoded: &str) -> Result<CipherResult, CipherError> {
    let ciphertext =
        base64::decode(encoded.trim()).map_err(|err| CipherError::InvalidEncodedInput {
            reason: err.to_string(),
        })?;
    decrypt(key, &ciphertext)
}

/// Runs the forward round pipeline on one block, snapshotting every sub-step.
fn encrypt_block_traced(block: &Block, round_keys: &RoundKeys) -> (Block, Vec<RoundTrace>) {
    let mut rounds = Vec::with_capacity(10);
    let mut state = round::add_round_key(block, round_keys.get(0));

    for number in 1..=10 {
        let start_of_round = snapshot(&state);
        state = round::sub_bytes(&state);
        let after_sub_bytes = snapshot(&state);
        state = round::shift_rows(&state);
        let after_shift_rows = snapshot(&state);
        if number < 10 {
            state = round::mix_columns(&state);
        }
        // On the last round the label is still emitted with the state as-is.
        let after_mix_columns = snapshot(&state);
        state = round::add_round_key(&state, round_keys.get(number));
        let after_add_round_key = snapshot(&state);

        rounds.push(RoundTrace::Forward(ForwardRound {
            round: number,
            start_of_round,
            after_sub_bytes,
            after_shift_rows,
            after_mix_columns,
            after_add_round_key,
        }));
    }

    (state, rounds)
}

/// Runs the reverse round pipeline on one block, snapshotting every sub-step.
///
/// Display round `r` (1..=10) consumes round key `10 - r`, so the final
/// display round adds round key 0 and skips the column un-mix.
fn decrypt_block_traced(block: &Block, round_keys: &RoundKeys) -> (Block, Vec<RoundTrace>) {
    let mut rounds = Vec::with_capacity(10);
    let mut state = round::add_round_key(block, round_keys.get(10));

    for number in 1..=10 {
        let start_of_round = snapshot(&state);
        state = round::inv_shift_rows(&state);
        let after_inv_shift_rows = snapshot(&state);
        state = round::inv_sub_bytes(&state);
        let after_inv_sub_bytes = snapshot(&state);
        state = round::add_round_key(&state, round_keys.get(10 - number));
        let after_add_round_key = snapshot(&state);
        if number < 10 {
            state = round::inv_mix_columns(&state);
        }
        let after_inv_mix_columns = snapshot(&state);

        rounds.push(RoundTrace::Inverse(InverseRound {
            round: number,
            start_of_round,
            after_inv_shift_rows,
            after_inv_sub_bytes,
            after_add_round_key,
            after_inv_mix_columns,
        }));
    }

    (state, rounds)
}
