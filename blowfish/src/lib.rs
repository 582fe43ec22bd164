//! Blowfish block cipher
//!
//! 64-bit blocks, 16 Feistel rounds, keys of 32 to 448 bits. Halves are read
//! big-endian, which matches the reference implementation and libmcrypt's
//! `blowfish` (not the little-endian `blowfish-compat`).

use std::fmt;
use std::ops::RangeInclusive;

use cipher_modes::{BlockCipher, KeySchedule, Result};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

mod consts;

use consts::{INIT_P, INIT_S, P_ARRAY_LEN, S_BOX_LEN};

/// Blowfish operates on 64-bit blocks (8 bytes).
pub const BLOCK_SIZE: usize = 8;
/// Shortest accepted key, in bytes.
pub const MIN_KEY_BYTES: usize = 4;
/// Longest accepted key (448 bits), in bytes.
pub const MAX_KEY_BYTES: usize = 56;

/// An expanded Blowfish key: the P-array plus four S-boxes.
///
/// Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blowfish {
    p: [u32; P_ARRAY_LEN],
    s: [[u32; S_BOX_LEN]; 4],
}

impl Blowfish {
    /// Expands `key` into a key schedule.
    ///
    /// Fails with `EmptyKey` or `InvalidKeyLength` outside 4..=56 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::validate_key(key)?;

        let mut cipher = Blowfish {
            p: INIT_P,
            s: INIT_S,
        };
        cipher.expand_key(key);

        trace!(key_len = key.len(), "blowfish key schedule expanded");
        Ok(cipher)
    }

    fn expand_key(&mut self, key: &[u8]) {
        let mut key_bytes = key.iter().copied().cycle();
        for entry in self.p.iter_mut() {
            let word = (&mut key_bytes)
                .take(4)
                .fold(0u32, |acc, byte| acc << 8 | u32::from(byte));
            *entry ^= word;
        }

        let (mut l, mut r) = (0u32, 0u32);

        for i in (0..P_ARRAY_LEN).step_by(2) {
            (l, r) = self.encrypt_halves(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }

        for sbox in 0..4 {
            for i in (0..S_BOX_LEN).step_by(2) {
                (l, r) = self.encrypt_halves(l, r);
                self.s[sbox][i] = l;
                self.s[sbox][i + 1] = r;
            }
        }
    }

    /// F(x) = ((S0[a] + S1[b]) ^ S2[c]) + S3[d]
    #[inline(always)]
    fn round(&self, x: u32) -> u32 {
        let [a, b, c, d] = x.to_be_bytes();
        let h = self.s[0][a as usize].wrapping_add(self.s[1][b as usize]);
        (h ^ self.s[2][c as usize]).wrapping_add(self.s[3][d as usize])
    }

    fn encrypt_halves(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for pair in self.p[..16].chunks_exact(2) {
            l ^= pair[0];
            r ^= self.round(l);
            r ^= pair[1];
            l ^= self.round(r);
        }
        l ^= self.p[16];
        r ^= self.p[17];
        (r, l)
    }

    fn decrypt_halves(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for pair in self.p[2..].chunks_exact(2).rev() {
            l ^= pair[1];
            r ^= self.round(l);
            r ^= pair[0];
            l ^= self.round(r);
        }
        l ^= self.p[1];
        r ^= self.p[0];
        (r, l)
    }
}

fn read_halves(block: &[u8]) -> (u32, u32) {
    let l = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
    let r = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
    (l, r)
}

fn write_halves(block: &mut [u8], l: u32, r: u32) {
    block[..4].copy_from_slice(&l.to_be_bytes());
    block[4..BLOCK_SIZE].copy_from_slice(&r.to_be_bytes());
}

impl BlockCipher for Blowfish {
    fn encrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let (l, r) = read_halves(block);
        let (l, r) = self.encrypt_halves(l, r);
        write_halves(block, l, r);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let (l, r) = read_halves(block);
        let (l, r) = self.decrypt_halves(l, r);
        write_halves(block, l, r);
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

impl KeySchedule for Blowfish {
    const KEY_SIZES: RangeInclusive<usize> = MIN_KEY_BYTES..=MAX_KEY_BYTES;

    fn new_from_key(key: &[u8]) -> Result<Self> {
        Self::new(key)
    }
}

impl fmt::Debug for Blowfish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blowfish").finish_non_exhaustive()
    }
}
