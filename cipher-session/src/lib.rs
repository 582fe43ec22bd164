//! # Cipher Session
//!
//! Stateful encrypt/decrypt over hex strings: pick a cipher and a mode, set a
//! key, and the session takes care of the IV, padding and hex transport.
//!
//! Ciphertext is lowercase hex, twice as long as the raw ciphertext, which is
//! always a whole number of 8-byte Blowfish blocks. With the default
//! [`Padding::Zero`] the output is interchangeable with libmcrypt's
//! Blowfish-CBC, which zero-pads the same way.

pub mod choice;
pub mod error;
pub mod session;

pub use choice::{CipherChoice, ModeChoice};
pub use cipher_modes::{CipherError, Padding};
pub use error::{Result, SessionError};
pub use session::CipherSession;
