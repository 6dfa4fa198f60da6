use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::CryptoError;

/// Block size of the underlying cipher in bytes (128 bits).
pub const BLOCK_SIZE: usize = 16;

/// Key size accepted by the underlying cipher in bytes (128 bits).
pub const KEY_SIZE: usize = 16;

/// Block cipher mode identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Ecb,
    Cbc,
    Ctr,
    Ccm,
}

impl CipherMode {
    /// All supported modes.
    pub const ALL: [CipherMode; 4] = [
        CipherMode::Ecb,
        CipherMode::Cbc,
        CipherMode::Ctr,
        CipherMode::Ccm,
    ];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            CipherMode::Ecb => "ECB",
            CipherMode::Cbc => "CBC",
            CipherMode::Ctr => "CTR",
            CipherMode::Ccm => "CCM",
        }
    }

    /// Whether the mode takes an IV or nonce.
    pub fn requires_nonce(self) -> bool {
        !matches!(self, CipherMode::Ecb)
    }

    /// Accepted IV/nonce lengths in bytes, or `None` for ECB.
    pub fn nonce_len_range(self) -> Option<RangeInclusive<usize>> {
        match self {
            CipherMode::Ecb => None,
            CipherMode::Cbc | CipherMode::Ctr => Some(BLOCK_SIZE..=BLOCK_SIZE),
            CipherMode::Ccm => Some(7..=13),
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::Ecb),
            "CBC" => Ok(CipherMode::Cbc),
            "CTR" => Ok(CipherMode::Ctr),
            "CCM" => Ok(CipherMode::Ccm),
            _ => Err(CryptoError::UnknownMode(s.to_string())),
        }
    }
}
