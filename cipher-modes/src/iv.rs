//! Initialization vector generation

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{CipherError, Result};

/// Draws `size` bytes from the operating system's CSPRNG.
///
/// Returns `Ok(None)` when `size == 0`, i.e. the mode does not use an IV.
pub fn generate_iv(size: usize) -> Result<Option<Vec<u8>>> {
    generate_iv_with(&mut OsRng, size)
}

/// Same as [`generate_iv`] with a caller-supplied cryptographic RNG.
pub fn generate_iv_with<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    size: usize,
) -> Result<Option<Vec<u8>>> {
    if size == 0 {
        return Ok(None);
    }

    let mut iv = vec![0u8; size];
    rng.try_fill_bytes(&mut iv)
        .map_err(|e| CipherError::RandomSource(e.to_string()))?;
    Ok(Some(iv))
}
