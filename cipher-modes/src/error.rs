//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Invalid key length {len} (accepted range is {min}..={max} bytes)")]
    InvalidKeyLength { len: usize, min: usize, max: usize },

    #[error("IV cannot be empty")]
    EmptyIv,

    #[error("Invalid IV length {actual} (must match block size {expected})")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Ciphertext length {len} is not a multiple of the block size {block_size}")]
    InvalidCiphertextLength { len: usize, block_size: usize },

    #[error("Padding error")]
    InvalidPadding,

    #[error("Decryption requires hex input: {0}")]
    InvalidHexInput(String),

    #[error("Secure random source failed: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
