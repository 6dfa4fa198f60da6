//! Printable key and nonce generation.
//!
//! Keys and IVs are produced as strings over a fixed 76-character printable
//! alphabet and used directly as raw key/IV bytes. Each character carries
//! `log2(76) ≈ 6.25` bits of entropy rather than 8, so a 16-character key
//! holds about 100 bits. This is a property of the format (keys that a
//! person can read and type back), not of the randomness source.
//!
//! Randomness is injected through [`RandomSource`]; [`SystemRandom`] is the
//! OS-backed default.
//!
//! # Example
//!
//! ```
//! use aesmodes_crypto::keygen::KeyGenerator;
//!
//! let mut keygen = KeyGenerator::system();
//! let key = keygen.generate_key().expect("randomness available");
//! assert_eq!(key.len(), 16);
//! ```

use aesmodes_types::{CryptoError, BLOCK_SIZE, KEY_SIZE};
use zeroize::{Zeroize, Zeroizing};

/// Number of distinct characters in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 76;

/// The characters keys and nonces are drawn from.
pub const ALPHABET: &[u8; ALPHABET_LEN] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+";

/// Length of a generated CCM nonce (the longest CCM accepts).
pub const CCM_NONCE_LEN: usize = 13;

/// Bytes at or above this value are rejected so that `b % 76` is uniform.
const REJECT_THRESHOLD: u8 = (256 / ALPHABET_LEN * ALPHABET_LEN) as u8;

/// Consecutive fills without a single accepted byte before giving up.
const MAX_EMPTY_FILLS: usize = 16;

const FILL_CHUNK: usize = 32;

/// Trait for pluggable randomness sources.
pub trait RandomSource: Send {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError>;
}

/// System randomness source wrapping `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(buf).map_err(|e| {
            tracing::debug!(error = %e, "getrandom failed");
            CryptoError::RandGenFail
        })
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill(buf)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill(buf)
    }
}

/// Generator for printable keys, IVs and nonces.
pub struct KeyGenerator<R = SystemRandom> {
    source: R,
}

impl KeyGenerator<SystemRandom> {
    /// A generator backed by the operating system.
    pub fn system() -> Self {
        Self::with_source(SystemRandom)
    }
}

impl<R: RandomSource> KeyGenerator<R> {
    /// A generator backed by a caller-supplied source.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generate `len` characters, each drawn uniformly from [`ALPHABET`].
    pub fn generate(&mut self, len: usize) -> Result<Zeroizing<String>, CryptoError> {
        let mut out = Zeroizing::new(String::with_capacity(len));
        let mut buf = [0u8; FILL_CHUNK];
        let mut empty_fills = 0;

        while out.len() < len {
            if let Err(e) = self.source.fill(&mut buf) {
                buf.zeroize();
                return Err(e);
            }
            let before = out.len();
            for &b in buf.iter() {
                if out.len() == len {
                    break;
                }
                if b < REJECT_THRESHOLD {
                    out.push(ALPHABET[b as usize % ALPHABET_LEN] as char);
                }
            }
            if out.len() == before {
                empty_fills += 1;
                if empty_fills >= MAX_EMPTY_FILLS {
                    buf.zeroize();
                    tracing::debug!("random source produced no usable bytes");
                    return Err(CryptoError::RandGenFail);
                }
            } else {
                empty_fills = 0;
            }
        }
        buf.zeroize();
        Ok(out)
    }

    /// Generate a 16-character AES-128 key.
    pub fn generate_key(&mut self) -> Result<Zeroizing<String>, CryptoError> {
        self.generate(KEY_SIZE)
    }

    /// Generate a 16-character IV for CBC or CTR.
    pub fn generate_iv(&mut self) -> Result<String, CryptoError> {
        self.generate(BLOCK_SIZE).map(|s| s.as_str().to_owned())
    }

    /// Same as [`generate_iv`](Self::generate_iv).
    pub fn generate_nonce(&mut self) -> Result<String, CryptoError> {
        self.generate_iv()
    }

    /// Generate a 13-character CCM nonce.
    ///
    /// This is the tail of a full 16-character IV.
    pub fn generate_ccm_nonce(&mut self) -> Result<String, CryptoError> {
        let iv = self.generate_iv()?;
        Ok(iv[BLOCK_SIZE - CCM_NONCE_LEN..].to_owned())
    }
}

/// Generate a 16-character key from the system source.
pub fn generate_key() -> Result<Zeroizing<String>, CryptoError> {
    KeyGenerator::system().generate_key()
}

/// Generate a 16-character IV/nonce from the system source.
pub fn generate_nonce() -> Result<String, CryptoError> {
    KeyGenerator::system().generate_nonce()
}
