//! AES-128 block cipher primitive.
//!
//! The block transform itself comes from the RustCrypto `aes` crate, which
//! selects AES-NI/ARMv8 instructions or a constant-time software fallback at
//! runtime. This module only adapts it to [`BlockCipher`] and enforces the
//! 128-bit key size. For modes of operation see the [`modes`](crate::modes)
//! module.

use ::aes::cipher::generic_array::GenericArray;
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use ::aes::Aes128;
use aesmodes_types::{CryptoError, BLOCK_SIZE, KEY_SIZE};

use crate::provider::BlockCipher;

/// AES block size in bytes (128 bits).
pub const AES_BLOCK_SIZE: usize = BLOCK_SIZE;

/// AES-128 key size in bytes.
pub const AES_KEY_SIZE: usize = KEY_SIZE;

/// An AES-128 key with precomputed round keys.
///
/// Round keys are wiped when the value is dropped.
#[derive(Clone)]
pub struct AesKey {
    inner: Aes128,
}

impl AesKey {
    /// Create a new AES-128 key from raw bytes.
    ///
    /// Only 16-byte keys are accepted.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != AES_KEY_SIZE {
            tracing::debug!(got = key.len(), "aes: rejected key length");
            return Err(CryptoError::InvalidKeyLength {
                expected: AES_KEY_SIZE,
                got: key.len(),
            });
        }
        let inner = Aes128::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength {
            expected: AES_KEY_SIZE,
            got: key.len(),
        })?;
        Ok(Self { inner })
    }

    /// Encrypt a single 16-byte block in place.
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        check_block(block)?;
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    /// Decrypt a single 16-byte block in place.
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        check_block(block)?;
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    /// Return the key length in bytes.
    pub fn key_len(&self) -> usize {
        AES_KEY_SIZE
    }
}

impl std::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesKey").finish_non_exhaustive()
    }
}

fn check_block(block: &[u8]) -> Result<(), CryptoError> {
    if block.len() != AES_BLOCK_SIZE {
        return Err(CryptoError::InvalidBlockLength {
            expected: AES_BLOCK_SIZE,
            got: block.len(),
        });
    }
    Ok(())
}

impl BlockCipher for AesKey {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        AES_KEY_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        AesKey::encrypt_block(self, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        AesKey::decrypt_block(self, block)
    }
}
