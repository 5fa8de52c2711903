//! Block representation helpers.

/// Size of a PRESENT block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// PRESENT block of 8 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Reads a block as a 64-bit word, most-significant byte first.
#[inline]
pub(crate) fn u64_from_be(block: &Block) -> u64 {
    u64::from_be_bytes(*block)
}

/// Writes a 64-bit word back into a block, most-significant byte first.
#[inline]
pub(crate) fn be_from_u64(word: u64) -> Block {
    word.to_be_bytes()
}
