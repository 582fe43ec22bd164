//! Utility functions for cipher modes

use crate::error::{CipherError, Result};

/// How plaintext is stretched to a whole number of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Append zero bytes up to the next block boundary; strip every trailing
    /// zero byte after decryption. Lossy for plaintext that ends in `0x00`.
    #[default]
    Zero,
    /// PKCS#7: append `n` bytes of value `n`, always at least one.
    Pkcs7,
}

impl Padding {
    /// Pads `data` to a multiple of `block_size`
    pub fn apply(self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        match self {
            Padding::Zero => Ok(add_padding(data, block_size)),
            Padding::Pkcs7 => add_pkcs7_padding(data, block_size),
        }
    }

    /// Removes the padding added by [`Padding::apply`]
    pub fn remove(self, data: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
        match self {
            Padding::Zero => Ok(remove_padding(data)),
            Padding::Pkcs7 => remove_pkcs7_padding(data, block_size),
        }
    }
}

/// Add null padding to data
pub fn add_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    let mut padded = data.to_vec();
    let remainder = data.len() % block_size;

    if remainder != 0 {
        padded.resize(data.len() + block_size - remainder, 0);
    }

    padded
}

/// Remove null padding from data
pub fn remove_padding(mut data: Vec<u8>) -> Vec<u8> {
    while data.last() == Some(&0) {
        data.pop();
    }
    data
}

/// Add PKCS#7 padding to data
///
/// The pad length is stored in one byte, so only block sizes 1..=255 work.
pub fn add_pkcs7_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(CipherError::InvalidBlockSize);
    }
    let pad = block_size - data.len() % block_size;
    let pad_byte = u8::try_from(pad).map_err(|_| CipherError::InvalidBlockSize)?;

    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad_byte);
    Ok(padded)
}

/// Remove PKCS#7 padding from data
pub fn remove_pkcs7_padding(mut data: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
    let pad = match data.last() {
        Some(&last) => last as usize,
        None => return Err(CipherError::InvalidPadding),
    };

    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(CipherError::InvalidPadding);
    }
    if !data[data.len() - pad..].iter().all(|&b| b as usize == pad) {
        return Err(CipherError::InvalidPadding);
    }

    data.truncate(data.len() - pad);
    Ok(data)
}

/// XOR `other` into `block`
pub fn xor_in_place(block: &mut [u8], other: &[u8]) -> Result<()> {
    if block.len() != other.len() {
        return Err(CipherError::InvalidBlockSize);
    }

    block.iter_mut().zip(other).for_each(|(x, y)| *x ^= y);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding_to_block_boundary() {
        assert_eq!(add_padding(b"HELLO!!", 8), b"HELLO!!\0".to_vec());
        assert_eq!(add_padding(b"12345678", 8), b"12345678".to_vec());
        assert!(add_padding(b"", 8).is_empty());
    }

    #[test]
    fn test_zero_padding_strips_genuine_zeros() {
        // trailing NUL bytes in the plaintext are indistinguishable from padding
        let recovered = remove_padding(b"data\0\0\0\0".to_vec());
        assert_eq!(recovered, b"data");
        assert!(remove_padding(vec![0u8; 16]).is_empty());
    }

    #[test]
    fn test_pkcs7_padding() {
        assert_eq!(add_pkcs7_padding(b"HELLO!!", 8).unwrap(), b"HELLO!!\x01".to_vec());
        assert_eq!(add_pkcs7_padding(b"", 8).unwrap(), vec![8u8; 8]);
        assert_eq!(add_pkcs7_padding(b"12345678", 8).unwrap().len(), 16);
        assert_eq!(add_pkcs7_padding(b"", 255).unwrap(), vec![255u8; 255]);
    }

    #[test]
    fn test_pkcs7_rejects_oversized_blocks() {
        // a 256-byte pad length does not fit the single padding byte
        assert_eq!(add_pkcs7_padding(b"", 256), Err(CipherError::InvalidBlockSize));
        assert_eq!(
            Padding::Pkcs7.apply(&[1u8; 300], 512),
            Err(CipherError::InvalidBlockSize)
        );
        assert_eq!(add_pkcs7_padding(b"abc", 0), Err(CipherError::InvalidBlockSize));
        assert_eq!(Padding::Zero.apply(&[1u8; 300], 512).unwrap().len(), 512);
    }

    #[test]
    fn test_pkcs7_keeps_trailing_zeros() {
        let data = b"data\0\0";
        let padded = Padding::Pkcs7.apply(data, 8).unwrap();
        assert_eq!(Padding::Pkcs7.remove(padded, 8).unwrap(), data.to_vec());
    }

    #[test]
    fn test_pkcs7_rejects_malformed_padding() {
        assert_eq!(
            remove_pkcs7_padding(b"1234567\x00".to_vec(), 8),
            Err(CipherError::InvalidPadding)
        );
        assert_eq!(
            remove_pkcs7_padding(b"123456\x03\x02".to_vec(), 8),
            Err(CipherError::InvalidPadding)
        );
        assert_eq!(
            remove_pkcs7_padding(b"1234567\x09".to_vec(), 8),
            Err(CipherError::InvalidPadding)
        );
        assert_eq!(remove_pkcs7_padding(Vec::new(), 8), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn test_xor_in_place() {
        let mut block = [0x0f, 0xf0];
        xor_in_place(&mut block, &[0xff, 0xff]).unwrap();
        assert_eq!(block, [0xf0, 0x0f]);

        assert!(matches!(
            xor_in_place(&mut block, &[0x00]),
            Err(CipherError::InvalidBlockSize)
        ));
    }
}
