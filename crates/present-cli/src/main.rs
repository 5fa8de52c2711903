//! Command-line interface for the PRESENT-80 block cipher.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use present_core::{Cipher, BLOCK_SIZE, KEY_SIZE};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// PRESENT-80 CLI.
#[derive(Parser)]
#[command(
    name = "present",
    version,
    author,
    about = "PRESENT-80 block cipher CLI (raw 8-byte blocks, testing harness only)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh 80-bit key and print it as 20 hex characters.
    Keygen {
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt 8-byte blocks from a file.
    Enc {
        /// PRESENT-80 key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (must be a multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt 8-byte blocks from a file.
    Dec {
        /// PRESENT-80 key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext, must be a multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify the published vectors plus random round trips.
    Check {
        /// Number of random round-trip samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: generate a key, encrypt a random block, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key_bytes);
    println!("{}", hex::encode(key_bytes));
    Ok(())
}

fn cmd_enc(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = parse_key_hex(key_hex)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!("input length must be a multiple of 8 bytes");
    }
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_slice(chunk)?;
    }
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = parse_key_hex(key_hex)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!("input length must be a multiple of 8 bytes");
    }
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.decrypt_slice(chunk)?;
    }
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    // Known-answer vectors published with the cipher definition.
    const VECTORS: [(&str, &str, &str); 4] = [
        ("00000000000000000000", "0000000000000000", "5579c1387b228445"),
        ("ffffffffffffffffffff", "0000000000000000", "e72c46c0f5945049"),
        ("00000000000000000000", "ffffffffffffffff", "a112ffc72f68417b"),
        ("ffffffffffffffffffff", "ffffffffffffffff", "3333dcd3213210d2"),
    ];
    for (key_hex, pt_hex, ct_hex) in VECTORS {
        let cipher = parse_key_hex(key_hex)?;
        let pt = parse_block_hex(pt_hex)?;
        let ct = parse_block_hex(ct_hex)?;
        if cipher.encrypt_block(&pt) != ct {
            bail!("known-answer vector failed for key {key_hex}");
        }
        if cipher.decrypt_block(&ct) != pt {
            bail!("known-answer inverse failed for key {key_hex}");
        }
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; KEY_SIZE];
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let cipher = Cipher::new(&key_bytes)?;
        if cipher.decrypt_block(&cipher.encrypt_block(&block)) != block {
            bail!("random round trip failed for key {}", hex::encode(key_bytes));
        }
    }
    println!("check passed: 4 known-answer vectors, {samples} random round trips");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Cipher::new(&key_bytes)?;

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);
    let plaintext_hex = hex::encode(block);

    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {plaintext_hex}");
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Cipher> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != KEY_SIZE {
        bail!("PRESENT-80 key must be 10 bytes (20 hex characters)");
    }
    Ok(Cipher::new(&bytes)?)
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be 8 bytes (16 hex characters)");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
