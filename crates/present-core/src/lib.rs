//! Reference implementation of the PRESENT-80 lightweight block cipher.
//!
//! PRESENT is a substitution-permutation network operating on 64-bit blocks
//! with an 80-bit key: 31 full rounds of round-key mixing, a 4-bit S-box
//! layer, and a fixed bit permutation, followed by a final key-whitening
//! step. This crate provides:
//! - Key schedule for the 80-bit key variant.
//! - Single-block encryption and decryption.
//! - A [`Cipher`] value owning the derived round keys for repeated use.
//!
//! Only the raw single-block primitive is provided; block-chaining modes,
//! padding, and key management belong to the caller. The implementation aims
//! for clarity and testability rather than constant-time guarantees; beyond
//! having no data-dependent branching it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, generate_round_keys, Cipher};
pub use crate::error::PresentError;
pub use crate::key::{Present80Key, RoundKeys, KEY_SIZE};
