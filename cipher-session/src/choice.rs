//! Cipher and mode selection

use std::fmt;

use crate::error::SessionError;

/// Block cipher used by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherChoice {
    #[default]
    Blowfish,
}

impl CipherChoice {
    /// Numeric id, as accepted by [`TryFrom<u32>`]
    pub const fn id(self) -> u32 {
        match self {
            CipherChoice::Blowfish => 1,
        }
    }

    /// Block length in bytes
    pub const fn block_size(self) -> usize {
        match self {
            CipherChoice::Blowfish => blowfish::BLOCK_SIZE,
        }
    }

}

impl TryFrom<u32> for CipherChoice {
    type Error = SessionError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(CipherChoice::Blowfish),
            other => Err(SessionError::UnsupportedCipher(other)),
        }
    }
}

impl fmt::Display for CipherChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherChoice::Blowfish => f.write_str("blowfish"),
        }
    }
}

/// Mode of operation used by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeChoice {
    #[default]
    Cbc,
    Ecb,
}

impl ModeChoice {
    /// Numeric id, as accepted by [`TryFrom<u32>`]
    pub const fn id(self) -> u32 {
        match self {
            ModeChoice::Cbc => 1,
            ModeChoice::Ecb => 2,
        }
    }

    /// Whether chaining needs an IV
    pub const fn requires_iv(self) -> bool {
        matches!(self, ModeChoice::Cbc)
    }

    /// IV length for this mode under `cipher`; 0 when no IV is used
    pub const fn iv_size(self, cipher: CipherChoice) -> usize {
        if self.requires_iv() {
            cipher.block_size()
        } else {
            0
        }
    }
}

impl TryFrom<u32> for ModeChoice {
    type Error = SessionError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(ModeChoice::Cbc),
            2 => Ok(ModeChoice::Ecb),
            other => Err(SessionError::UnsupportedMode(other)),
        }
    }
}

impl fmt::Display for ModeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeChoice::Cbc => f.write_str("cbc"),
            ModeChoice::Ecb => f.write_str("ecb"),
        }
    }
}
