#![doc = "AES-128 modes of operation for aesmodes: ECB, CBC, CTR and CCM."]
#![forbid(unsafe_code)]

// Core traits
pub mod provider;

// Block cipher primitive
pub mod aes;

// Modes of operation
#[cfg(feature = "modes")]
pub mod modes;

// Key and nonce material
#[cfg(feature = "keygen")]
pub mod keygen;

pub mod cipher {
    //! Unified block cipher interface.
    pub use super::provider::BlockCipher;
}

pub use aesmodes_types::{CipherMode, CryptoError, ErrorKind, BLOCK_SIZE, KEY_SIZE};
