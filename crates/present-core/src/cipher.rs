//! PRESENT-80 key schedule and block encryption/decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::PresentError;
use crate::key::{Present80Key, RoundKeys};
use crate::round::{add_round_key, inv_p_layer, inv_sub_nibbles, p_layer, sub_nibbles};
use crate::sbox::sbox;

/// Number of round keys derived from one key. The final one is used for key
/// whitening only.
const ROUNDS: usize = 32;

/// The key schedule works on an 80-bit register kept in the low bits of a
/// `u128`.
const KEY_REGISTER_MASK: u128 = (1 << 80) - 1;

#[inline]
fn rotate_left_61(register: u128) -> u128 {
    ((register << 61) | (register >> 19)) & KEY_REGISTER_MASK
}

fn register_from_key(key: &Present80Key) -> u128 {
    let mut register = 0u128;
    for &byte in &key.0 {
        register = (register << 8) | u128::from(byte);
    }
    register
}

/// Expands an 80-bit key into 32 round keys.
///
/// Round key 0 is the top 64 bits of the raw key; each following round rotates
/// the 80-bit register left by 61 bits, passes the top nibble through the
/// S-box, and XORs the round counter into register bits 15 through 19 before
/// taking the top 64 bits again.
pub fn generate_round_keys(key: &Present80Key) -> RoundKeys {
    let mut register = register_from_key(key);

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS];
    round_keys[0] = ((register >> 16) as u64).to_be_bytes();

    for round in 1..ROUNDS {
        register = rotate_left_61(register);

        let top = sbox(((register >> 76) & 0x0f) as u8);
        register = (register & !(0x0f_u128 << 76)) | (u128::from(top) << 76);

        register ^= (round as u128) << 15;

        round_keys[round] = ((register >> 16) as u64).to_be_bytes();
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 8-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    for round in 0..ROUNDS - 1 {
        add_round_key(&mut state, round_keys.get(round));
        sub_nibbles(&mut state);
        p_layer(&mut state);
    }
    add_round_key(&mut state, round_keys.get(ROUNDS - 1));

    state
}

/// Decrypts a single 8-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_p_layer(&mut state);
        inv_sub_nibbles(&mut state);
    }
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// PRESENT-80 cipher instance.
///
/// Holds the 32 round keys derived eagerly at construction and nothing else;
/// a constructed cipher is immutable and may be shared by reference across
/// threads for any number of independent block operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    round_keys: RoundKeys,
}

impl Cipher {
    /// Builds a cipher from a raw key slice.
    ///
    /// Fails closed with [`PresentError::InvalidKeySize`] when the slice is
    /// not exactly 10 bytes.
    pub fn new(key: &[u8]) -> Result<Self, PresentError> {
        let key = Present80Key::try_from(key)?;
        Ok(Self::from_key(&key))
    }

    /// Builds a cipher from an already-validated key.
    pub fn from_key(key: &Present80Key) -> Self {
        Self {
            round_keys: generate_round_keys(key),
        }
    }

    /// Returns the cipher's block size in bytes.
    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Encrypts one block, returning the ciphertext.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block, returning the plaintext.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts an 8-byte slice in place.
    ///
    /// Fails closed with [`PresentError::InvalidBlockSize`] on any other
    /// length; the slice is never truncated or partially processed.
    pub fn encrypt_slice(&self, block: &mut [u8]) -> Result<(), PresentError> {
        if block.len() != BLOCK_SIZE {
            return Err(PresentError::InvalidBlockSize(block.len()));
        }
        let mut state = [0u8; BLOCK_SIZE];
        state.copy_from_slice(block);
        block.copy_from_slice(&self.encrypt_block(&state));
        Ok(())
    }

    /// Decrypts an 8-byte slice in place.
    ///
    /// Fails closed with [`PresentError::InvalidBlockSize`] on any other
    /// length; the slice is never truncated or partially processed.
    pub fn decrypt_slice(&self, block: &mut [u8]) -> Result<(), PresentError> {
        if block.len() != BLOCK_SIZE {
            return Err(PresentError::InvalidBlockSize(block.len()));
        }
        let mut state = [0u8; BLOCK_SIZE];
        state.copy_from_slice(block);
        block.copy_from_slice(&self.decrypt_block(&state));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const ZERO_KEY: [u8; 10] = [0x00; 10];
    const ONES_KEY: [u8; 10] = [0xff; 10];
    const ZERO_BLOCK: Block = [0x00; 8];
    const ONES_BLOCK: Block = [0xff; 8];

    // Known-answer vectors published with the cipher definition.
    const VECTORS: [([u8; 10], Block, Block); 4] = [
        (
            ZERO_KEY,
            ZERO_BLOCK,
            [0x55, 0x79, 0xc1, 0x38, 0x7b, 0x22, 0x84, 0x45],
        ),
        (
            ONES_KEY,
            ZERO_BLOCK,
            [0xe7, 0x2c, 0x46, 0xc0, 0xf5, 0x94, 0x50, 0x49],
        ),
        (
            ZERO_KEY,
            ONES_BLOCK,
            [0xa1, 0x12, 0xff, 0xc7, 0x2f, 0x68, 0x41, 0x7b],
        ),
        (
            ONES_KEY,
            ONES_BLOCK,
            [0x33, 0x33, 0xdc, 0xd3, 0x21, 0x32, 0x10, 0xd2],
        ),
    ];

    #[test]
    fn encrypt_matches_published_vectors() {
        for (key, plaintext, ciphertext) in VECTORS {
            let cipher = Cipher::new(&key).unwrap();
            assert_eq!(cipher.encrypt_block(&plaintext), ciphertext);
        }
    }

    #[test]
    fn decrypt_matches_published_vectors() {
        for (key, plaintext, ciphertext) in VECTORS {
            let cipher = Cipher::new(&key).unwrap();
            assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);
        }
    }

    #[test]
    fn zero_key_schedule_matches_reference() {
        let round_keys = generate_round_keys(&Present80Key::from(ZERO_KEY));
        assert_eq!(round_keys.get(0), &[0u8; 8]);
        assert_eq!(
            round_keys.get(1),
            &[0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            round_keys.get(2),
            &[0x50, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn first_round_key_is_the_raw_key_prefix() {
        let key = Present80Key::from([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x12, 0x34,
        ]);
        let round_keys = generate_round_keys(&key);
        assert_eq!(round_keys.get(0), &key.0[..8]);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 10];
            let mut block = [0u8; 8];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let cipher = Cipher::from_key(&Present80Key::from(key_bytes));
            let ct = cipher.encrypt_block(&block);
            let pt = cipher.decrypt_block(&ct);
            assert_eq!(pt, block);
            // Both compositions are the identity.
            assert_eq!(cipher.encrypt_block(&cipher.decrypt_block(&block)), block);
        }
    }

    #[test]
    fn repeated_construction_is_deterministic() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; 10];
        let mut block = [0u8; 8];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let first = Cipher::new(&key_bytes).unwrap();
        let second = Cipher::new(&key_bytes).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.encrypt_block(&block), second.encrypt_block(&block));
    }

    #[test]
    fn new_rejects_wrong_key_lengths() {
        for len in [0usize, 9, 11, 16] {
            let key = vec![0u8; len];
            assert_eq!(
                Cipher::new(&key).unwrap_err(),
                PresentError::InvalidKeySize(len)
            );
        }
    }

    #[test]
    fn slice_api_round_trips_and_validates_length() {
        let cipher = Cipher::new(&ZERO_KEY).unwrap();

        let mut buf = [0u8; 8];
        cipher.encrypt_slice(&mut buf).unwrap();
        assert_eq!(buf, VECTORS[0].2);
        cipher.decrypt_slice(&mut buf).unwrap();
        assert_eq!(buf, ZERO_BLOCK);

        let mut short = [0u8; 7];
        assert_eq!(
            cipher.encrypt_slice(&mut short).unwrap_err(),
            PresentError::InvalidBlockSize(7)
        );
        let mut long = [0u8; 9];
        assert_eq!(
            cipher.decrypt_slice(&mut long).unwrap_err(),
            PresentError::InvalidBlockSize(9)
        );
    }

    #[test]
    fn block_size_reports_eight() {
        let cipher = Cipher::new(&ZERO_KEY).unwrap();
        assert_eq!(cipher.block_size(), BLOCK_SIZE);
    }
}
