//! Error types for cipher sessions

use cipher_modes::CipherError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unsupported cipher method: {0}")]
    UnsupportedCipher(u32),

    #[error("Unsupported encryption mode: {0}")]
    UnsupportedMode(u32),

    #[error("No key has been set on this session")]
    MissingKey,

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
