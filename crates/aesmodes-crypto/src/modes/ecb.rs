//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB mode does not provide semantic security.
//! Identical plaintext blocks under the same key produce identical
//! ciphertext blocks. It is provided for completeness and interoperability.

use aesmodes_types::{CryptoError, BLOCK_SIZE};

use super::padding::pkcs7_pad;
use crate::aes::AesKey;
use crate::provider::BlockCipher;

/// Encrypt data using ECB mode with AES-128 and PKCS#7 padding.
pub fn ecb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    ecb_encrypt_with(&cipher, plaintext)
}

/// Decrypt data using ECB mode with AES-128 and remove PKCS#7 padding.
pub fn ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    ecb_decrypt_with(&cipher, ciphertext)
}

/// ECB encryption with an initialized block cipher.
pub fn ecb_encrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut output = pkcs7_pad(plaintext, BLOCK_SIZE)?;
    for chunk in output.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_block(chunk)?;
    }
    tracing::trace!(mode = "ecb", blocks = output.len() / BLOCK_SIZE, "encrypted");
    Ok(output)
}

/// ECB decryption with an initialized block cipher.
pub fn ecb_decrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        tracing::debug!(mode = "ecb", len = ciphertext.len(), "rejected ciphertext length");
        return Err(CryptoError::InvalidCiphertextLength {
            block_size: BLOCK_SIZE,
            got: ciphertext.len(),
        });
    }
    let mut output = ciphertext.to_vec();
    for chunk in output.chunks_mut(BLOCK_SIZE) {
        cipher.decrypt_block(chunk)?;
    }
    super::strip_padding(output, "ecb")
}
