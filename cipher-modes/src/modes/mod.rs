//! Cipher modes implementation

pub mod cbc;
pub mod ecb;

use crate::error::{CipherError, Result};

/// Main struct for cipher modes
pub struct CipherModes;

impl CipherModes {
    /// Validate block size
    pub fn validate_block_size(block_size: usize) -> Result<()> {
        if block_size == 0 {
            Err(CipherError::InvalidBlockSize)
        } else {
            Ok(())
        }
    }

    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherError::InvalidIvLength {
                expected: block_size,
                actual: iv.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Ciphertext must consist of whole blocks
    pub fn validate_ciphertext_length(ciphertext: &[u8], block_size: usize) -> Result<()> {
        if ciphertext.len() % block_size != 0 {
            Err(CipherError::InvalidCiphertextLength {
                len: ciphertext.len(),
                block_size,
            })
        } else {
            Ok(())
        }
    }
}
