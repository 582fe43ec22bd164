//! # Cipher Modes Library
//!
//! Block cipher modes of operation and the plumbing around them.
//!
//! ## Supported Modes
//!
//! - **CBC** (Cipher Block Chaining) - requires an IV of one block
//! - **ECB** (Electronic Code Book) - no IV, identical blocks leak
//!
//! ## Usage
//!
//! Any type implementing [`BlockCipher`] can be driven by [`CipherModes`]:
//!
//! ```rust
//! use cipher_modes::{codec, BlockCipher, CipherModes, Padding};
//!
//! /// Byte-wise complement, a stand-in for a real cipher.
//! struct Invert;
//!
//! impl BlockCipher for Invert {
//!     fn encrypt_block(&self, block: &mut [u8]) {
//!         block.iter_mut().for_each(|b| *b = !*b);
//!     }
//!     fn decrypt_block(&self, block: &mut [u8]) {
//!         self.encrypt_block(block);
//!     }
//!     fn block_size(&self) -> usize {
//!         8
//!     }
//! }
//!
//! let iv = [0u8; 8];
//! let encrypted = CipherModes::cbc_encrypt(&Invert, b"Hello, World!", &iv, Padding::Zero)?;
//! let wire = codec::to_hex(&encrypted);
//! assert_eq!(wire.len() % 16, 0);
//!
//! let decrypted = CipherModes::cbc_decrypt(&Invert, &codec::from_hex(&wire)?, &iv, Padding::Zero)?;
//! assert_eq!(decrypted, b"Hello, World!");
//! # Ok::<(), cipher_modes::CipherError>(())
//! ```

// Public modules
pub mod cipher;
pub mod codec;
pub mod error;
pub mod iv;
pub mod modes;
pub mod utils;

// Re-exports for easy access
pub use cipher::{BlockCipher, KeySchedule};
pub use error::{CipherError, Result};
pub use modes::CipherModes;
pub use utils::Padding;
