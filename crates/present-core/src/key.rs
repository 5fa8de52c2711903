//! Key types for PRESENT-80.

use crate::block::Block;
use crate::error::PresentError;

/// Size of a PRESENT-80 key in bytes.
pub const KEY_SIZE: usize = 10;

/// PRESENT-80 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Present80Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Present80Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Present80Key {
    type Error = PresentError;

    /// Validates the slice length, failing closed on anything but 10 bytes.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| PresentError::InvalidKeySize(value.len()))?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for PRESENT-80.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 32]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=31).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
