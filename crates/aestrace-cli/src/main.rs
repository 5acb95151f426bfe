//! Command-line interface for `aestrace`.
//!
//! Prints a JSON trace report on stdout. Any failure is converted into a
//! uniform `{"error": "..."}` object with a nonzero exit code, so a caller
//! always receives structured output.

#![forbid(unsafe_code)]

use aestrace_engine::{decrypt_base64, encrypt, ErrorReport};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// AES-128 ECB cipher with per-round trace output.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    about = "AES-128 ECB cipher that emits a per-round trace of internal state"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message; prints the round trace and base64 ciphertext.
    Encrypt {
        /// Cipher key as 16 ASCII characters.
        #[arg(long, value_name = "TEXT")]
        key: Option<String>,
        /// Cipher key as 32 hex characters.
        #[arg(long, value_name = "HEX", conflicts_with = "key")]
        key_hex: Option<String>,
        /// Plaintext message.
        message: String,
    },
    /// Decrypt base64 ciphertext; prints the round trace and recovered text.
    Decrypt {
        /// Cipher key as 16 ASCII characters.
        #[arg(long, value_name = "TEXT")]
        key: Option<String>,
        /// Cipher key as 32 hex characters.
        #[arg(long, value_name = "HEX", conflicts_with = "key")]
        key_hex: Option<String>,
        /// Base64-encoded ciphertext.
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            let report = ErrorReport {
                error: format!("{err:#}"),
            };
            let json = serde_json::to_string(&report)
                .unwrap_or_else(|_| String::from("{\"error\": \"report serialization failed\"}"));
            println!("{json}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Encrypt {
            key,
            key_hex,
            message,
        } => {
            let key = key_bytes(key, key_hex)?;
            let result = encrypt(&key, message.as_bytes())?;
            serde_json::to_string(&result.into_report()).context("serialize report")
        }
        Commands::Decrypt {
            key,
            key_hex,
            input,
        } => {
            let key = key_bytes(key, key_hex)?;
            let result = decrypt_base64(&key, &input)?;
            serde_json::to_string(&result.into_report()).context("serialize report")
        }
    }
}

fn key_bytes(key: Option<String>, key_hex: Option<String>) -> Result<Vec<u8>> {
    match (key, key_hex) {
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode key hex"),
        (None, None) => bail!("either --key or --key-hex is required"),
        (Some(_), Some(_)) => bail!("--key and --key-hex are mutually exclusive"),
    }
}
