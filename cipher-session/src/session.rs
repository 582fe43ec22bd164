//! Keyed encryption session

use std::fmt;

use blowfish::Blowfish;
use cipher_modes::{codec, iv, BlockCipher, CipherError, CipherModes, KeySchedule, Padding};
use tracing::debug;

use crate::choice::{CipherChoice, ModeChoice};
use crate::error::{Result, SessionError};

/// Key schedule for whichever cipher the session was built with.
#[derive(Clone)]
enum ScheduledCipher {
    Blowfish(Blowfish),
}

impl ScheduledCipher {
    fn new(choice: CipherChoice, key: &[u8]) -> std::result::Result<Self, CipherError> {
        match choice {
            CipherChoice::Blowfish => Blowfish::new_from_key(key).map(ScheduledCipher::Blowfish),
        }
    }
}

impl BlockCipher for ScheduledCipher {
    fn encrypt_block(&self, block: &mut [u8]) {
        match self {
            ScheduledCipher::Blowfish(cipher) => cipher.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        match self {
            ScheduledCipher::Blowfish(cipher) => cipher.decrypt_block(block),
        }
    }

    fn block_size(&self) -> usize {
        match self {
            ScheduledCipher::Blowfish(cipher) => cipher.block_size(),
        }
    }
}

/// Holds a cipher/mode pair, a key and an IV, and turns plaintext into hex
/// ciphertext and back.
///
/// A session is plain owned data. Share one between threads behind a
/// `Mutex`, or give each thread its own.
///
/// ```rust
/// use cipher_session::{CipherChoice, CipherSession, ModeChoice};
///
/// let session = CipherSession::new(CipherChoice::Blowfish, ModeChoice::Cbc)?
///     .with_key(b"testkey123")?
///     .with_iv(&[0, 1, 2, 3, 4, 5, 6, 7])?;
///
/// let wire = session.encrypt(b"HELLO!!")?;
/// assert_eq!(wire, "ceabf5ec04773b2d");
/// assert_eq!(session.decrypt(&wire)?, b"HELLO!!");
/// # Ok::<(), cipher_session::SessionError>(())
/// ```
#[derive(Clone)]
pub struct CipherSession {
    cipher: CipherChoice,
    mode: ModeChoice,
    padding: Padding,
    schedule: Option<ScheduledCipher>,
    iv: Option<Vec<u8>>,
}

impl CipherSession {
    /// Creates a session and draws a fresh IV if the mode uses one.
    pub fn new(cipher: CipherChoice, mode: ModeChoice) -> Result<Self> {
        let iv = iv::generate_iv(mode.iv_size(cipher))?;

        debug!(%cipher, %mode, iv_size = mode.iv_size(cipher), "cipher session created");
        Ok(Self {
            cipher,
            mode,
            padding: Padding::default(),
            schedule: None,
            iv,
        })
    }

    /// Blowfish in CBC mode with a fresh IV, the usual configuration.
    pub fn blowfish_cbc() -> Result<Self> {
        Self::new(CipherChoice::Blowfish, ModeChoice::Cbc)
    }

    /// Creates a session from numeric cipher and mode ids.
    pub fn from_ids(cipher_id: u32, mode_id: u32) -> Result<Self> {
        let cipher = CipherChoice::try_from(cipher_id)?;
        let mode = ModeChoice::try_from(mode_id)?;
        Self::new(cipher, mode)
    }

    /// Cipher the session was built with
    pub fn cipher(&self) -> CipherChoice {
        self.cipher
    }

    /// Mode the session was built with
    pub fn mode(&self) -> ModeChoice {
        self.mode
    }

    /// Padding applied on encrypt and stripped on decrypt
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// IV length the cipher/mode pair expects (0: no IV used)
    pub fn iv_size(&self) -> usize {
        self.mode.iv_size(self.cipher)
    }

    /// Whether a key schedule is installed
    pub fn has_key(&self) -> bool {
        self.schedule.is_some()
    }

    /// Expands and installs `key`.
    ///
    /// On failure the previously installed key, if any, stays in place.
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let schedule = ScheduledCipher::new(self.cipher, key)?;
        self.schedule = Some(schedule);

        debug!(cipher = %self.cipher, key_len = key.len(), "session key installed");
        Ok(())
    }

    /// Replaces the IV.
    ///
    /// Only emptiness is checked here. A length that does not match the
    /// block size surfaces as `InvalidIvLength` on encrypt/decrypt.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        if iv.is_empty() {
            return Err(CipherError::EmptyIv.into());
        }
        self.iv = Some(iv.to_vec());

        debug!(iv_len = iv.len(), "session iv replaced");
        Ok(())
    }

    /// Current IV, `None` when the mode uses none and none was set
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    /// Draws a new random IV for the next message.
    ///
    /// Does nothing for modes without an IV; a caller-set IV is kept.
    pub fn regenerate_iv(&mut self) -> Result<()> {
        if let Some(fresh) = iv::generate_iv(self.iv_size())? {
            self.iv = Some(fresh);
        }
        Ok(())
    }

    /// Switches the padding policy for later calls
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// [`CipherSession::set_key`] in builder form
    pub fn with_key(mut self, key: &[u8]) -> Result<Self> {
        self.set_key(key)?;
        Ok(self)
    }

    /// [`CipherSession::set_iv`] in builder form
    pub fn with_iv(mut self, iv: &[u8]) -> Result<Self> {
        self.set_iv(iv)?;
        Ok(self)
    }

    /// [`CipherSession::set_padding`] in builder form
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.set_padding(padding);
        self
    }

    /// Encrypts `plaintext` and returns the ciphertext as lowercase hex.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let cipher = self.schedule.as_ref().ok_or(SessionError::MissingKey)?;

        let ciphertext = match self.mode {
            ModeChoice::Cbc => {
                CipherModes::cbc_encrypt(cipher, plaintext, self.chaining_iv(), self.padding)?
            }
            ModeChoice::Ecb => CipherModes::ecb_encrypt(cipher, plaintext, self.padding)?,
        };

        debug!(mode = %self.mode, len = plaintext.len(), out_len = ciphertext.len(), "encrypted");
        Ok(codec::to_hex(&ciphertext))
    }

    /// Decodes hex `data` and decrypts it.
    ///
    /// With [`Padding::Zero`] every trailing zero byte of the recovered
    /// plaintext is dropped, genuine ones included.
    pub fn decrypt(&self, data: &str) -> Result<Vec<u8>> {
        let ciphertext = codec::from_hex(data)?;
        let cipher = self.schedule.as_ref().ok_or(SessionError::MissingKey)?;

        let plaintext = match self.mode {
            ModeChoice::Cbc => {
                CipherModes::cbc_decrypt(cipher, &ciphertext, self.chaining_iv(), self.padding)?
            }
            ModeChoice::Ecb => CipherModes::ecb_decrypt(cipher, &ciphertext, self.padding)?,
        };

        debug!(mode = %self.mode, len = ciphertext.len(), out_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }

    /// An unset IV is passed as empty and rejected by the mode engine.
    fn chaining_iv(&self) -> &[u8] {
        self.iv.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for CipherSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSession")
            .field("cipher", &self.cipher)
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("has_key", &self.has_key())
            .field("iv", &self.iv.as_deref().map(codec::to_hex))
            .finish()
    }
}
