//! Trait-based provider mechanism for the block cipher primitive.
//!
//! Every mode is written against [`BlockCipher`] so that the chaining,
//! counter and MAC logic never depends on a concrete cipher implementation.

use aesmodes_types::CryptoError;

/// A 128-bit block cipher (e.g., AES-128) under a fixed, already expanded key.
pub trait BlockCipher: Send + Sync {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Key size in bytes.
    fn key_size(&self) -> usize;

    /// Encrypt a single block in-place.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError>;

    /// Decrypt a single block in-place.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError>;
}
