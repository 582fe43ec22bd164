//! Generic block cipher trait

use std::ops::RangeInclusive;

use crate::error::{CipherError, Result};

/// A keyed block permutation.
///
/// Implementors hold an already expanded key schedule; chaining is the job of
/// the mode engines in [`crate::modes`]. Both block methods expect
/// `block.len() == self.block_size()` and may panic otherwise.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]);

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}

/// Construction of a block cipher from raw key bytes.
pub trait KeySchedule: BlockCipher + Sized {
    /// Accepted raw key lengths in bytes.
    const KEY_SIZES: RangeInclusive<usize>;

    /// Expands `key` into a ready-to-use cipher.
    fn new_from_key(key: &[u8]) -> Result<Self>;

    /// Checks `key` against [`Self::KEY_SIZES`].
    fn validate_key(key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        if !Self::KEY_SIZES.contains(&key.len()) {
            return Err(CipherError::InvalidKeyLength {
                len: key.len(),
                min: *Self::KEY_SIZES.start(),
                max: *Self::KEY_SIZES.end(),
            });
        }
        Ok(())
    }
}
