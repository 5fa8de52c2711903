//! PRESENT round transformations.

use crate::block::{be_from_u64, u64_from_be, xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Adds (XORs) a round key into the state. Self-inverse, shared by both
/// directions.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

/// Replaces every nibble of the state with its forward S-box image.
#[inline]
pub fn sub_nibbles(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = (sbox(*byte >> 4) << 4) | sbox(*byte & 0x0f);
    }
}

/// Replaces every nibble of the state with its inverse S-box image.
#[inline]
pub fn inv_sub_nibbles(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = (inv_sbox(*byte >> 4) << 4) | inv_sbox(*byte & 0x0f);
    }
}

/// Applies the PRESENT bit permutation: the bit at position `p` moves to
/// position `16·p mod 63`, and bit 63 is a fixed point. Positions count from
/// the least-significant bit of the big-endian state word.
#[inline]
pub fn p_layer(state: &mut Block) {
    let bits = u64_from_be(state);
    let mut permuted = bits & (1 << 63);
    for pos in 0..63 {
        permuted |= ((bits >> pos) & 1) << ((pos * 16) % 63);
    }
    *state = be_from_u64(permuted);
}

/// Applies the exact set-inverse of [`p_layer`].
#[inline]
pub fn inv_p_layer(state: &mut Block) {
    let bits = u64_from_be(state);
    let mut permuted = bits & (1 << 63);
    for pos in 0..63 {
        permuted |= ((bits >> ((pos * 16) % 63)) & 1) << pos;
    }
    *state = be_from_u64(permuted);
}
