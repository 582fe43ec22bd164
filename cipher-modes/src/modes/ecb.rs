//! ECB (Electronic Code Book) mode implementation

use tracing::trace;

use crate::{BlockCipher, Padding, Result};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption
    pub fn ecb_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        plaintext: &[u8],
        padding: Padding,
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;

        let mut buffer = padding.apply(plaintext, block_size)?;
        buffer
            .chunks_mut(block_size)
            .for_each(|block| cipher.encrypt_block(block));

        trace!(blocks = buffer.len() / block_size, "ecb encrypt");
        Ok(buffer)
    }

    /// ECB mode decryption
    pub fn ecb_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        ciphertext: &[u8],
        padding: Padding,
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_ciphertext_length(ciphertext, block_size)?;

        let mut buffer = ciphertext.to_vec();
        buffer
            .chunks_mut(block_size)
            .for_each(|block| cipher.decrypt_block(block));

        trace!(blocks = buffer.len() / block_size, "ecb decrypt");
        padding.remove(buffer, block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_cipher::XorCipher;
    use crate::CipherError;

    #[test]
    fn test_ecb_encrypt_decrypt() {
        let cipher = XorCipher::new(b"testkey1");
        let plaintext = b"Hello World! This is a test message.";

        let ciphertext = CipherModes::ecb_encrypt(&cipher, plaintext, Padding::Zero).unwrap();
        let decrypted = CipherModes::ecb_decrypt(&cipher, &ciphertext, Padding::Zero).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_ecb_identical_blocks_repeat() {
        let cipher = XorCipher::new(b"testkey1");
        let ciphertext = CipherModes::ecb_encrypt(&cipher, b"AAAAAAAAAAAAAAAA", Padding::Zero).unwrap();
        assert_eq!(ciphertext[..8], ciphertext[8..]);
    }

    #[test]
    fn test_ecb_rejects_partial_block() {
        let cipher = XorCipher::new(b"testkey1");
        assert!(matches!(
            CipherModes::ecb_decrypt(&cipher, &[1u8; 7], Padding::Zero),
            Err(CipherError::InvalidCiphertextLength { .. })
        ));
    }
}
