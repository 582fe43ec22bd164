//! CBC (Cipher Block Chaining) mode implementation
//!
//! Encryption: C_0 = E(P_0 ⊕ IV), C_i = E(P_i ⊕ C_{i-1}).
//! Decryption: P_0 = D(C_0) ⊕ IV, P_i = D(C_i) ⊕ C_{i-1}.

use tracing::trace;

use crate::{utils, BlockCipher, Padding, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    ///
    /// `plaintext` is padded with `padding` before chaining, so the output is
    /// always a whole number of blocks.
    pub fn cbc_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        plaintext: &[u8],
        iv: &[u8],
        padding: Padding,
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut buffer = padding.apply(plaintext, block_size)?;
        let mut previous_block = iv.to_vec();

        for block in buffer.chunks_mut(block_size) {
            utils::xor_in_place(block, &previous_block)?;
            cipher.encrypt_block(block);
            previous_block.copy_from_slice(block);
        }

        trace!(blocks = buffer.len() / block_size, "cbc encrypt");
        Ok(buffer)
    }

    /// CBC mode decryption
    pub fn cbc_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        ciphertext: &[u8],
        iv: &[u8],
        padding: Padding,
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;
        Self::validate_ciphertext_length(ciphertext, block_size)?;

        let mut buffer = ciphertext.to_vec();
        let mut previous_block = iv.to_vec();
        let mut current_block = vec![0u8; block_size];

        for block in buffer.chunks_mut(block_size) {
            current_block.copy_from_slice(block);
            cipher.decrypt_block(block);
            utils::xor_in_place(block, &previous_block)?;
            std::mem::swap(&mut previous_block, &mut current_block);
        }

        trace!(blocks = buffer.len() / block_size, "cbc decrypt");
        padding.remove(buffer, block_size)
    }
}
