//! CBC (Cipher Block Chaining) mode of operation.

use aesmodes_types::{CryptoError, BLOCK_SIZE};

use super::padding::pkcs7_pad;
use super::xor_in_place;
use crate::aes::AesKey;
use crate::provider::BlockCipher;

/// Encrypt data using CBC mode with AES-128 and PKCS#7 padding.
pub fn cbc_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    cbc_encrypt_with(&cipher, iv, plaintext)
}

/// Decrypt data using CBC mode with AES-128 and remove PKCS#7 padding.
pub fn cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    cbc_decrypt_with(&cipher, iv, ciphertext)
}

fn check_iv(iv: &[u8]) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    iv.try_into().map_err(|_| {
        tracing::debug!(mode = "cbc", len = iv.len(), "rejected iv length");
        CryptoError::InvalidIvLength {
            expected: BLOCK_SIZE,
            got: iv.len(),
        }
    })
}

/// CBC encryption with an initialized block cipher.
pub fn cbc_encrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut prev = check_iv(iv)?;
    let mut data = pkcs7_pad(plaintext, BLOCK_SIZE)?;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        xor_in_place(chunk, &prev);
        cipher.encrypt_block(chunk)?;
        prev.copy_from_slice(chunk);
    }
    tracing::trace!(mode = "cbc", blocks = data.len() / BLOCK_SIZE, "encrypted");
    Ok(data)
}

/// CBC decryption with an initialized block cipher.
pub fn cbc_decrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut prev = check_iv(iv)?;
    if ciphertext.len() % BLOCK_SIZE != 0 {
        tracing::debug!(mode = "cbc", len = ciphertext.len(), "rejected ciphertext length");
        return Err(CryptoError::InvalidCiphertextLength {
            block_size: BLOCK_SIZE,
            got: ciphertext.len(),
        });
    }

    let mut output = ciphertext.to_vec();
    for chunk in output.chunks_mut(BLOCK_SIZE) {
        let mut ct_copy = [0u8; BLOCK_SIZE];
        ct_copy.copy_from_slice(chunk);
        cipher.decrypt_block(chunk)?;
        xor_in_place(chunk, &prev);
        prev = ct_copy;
    }
    super::strip_padding(output, "cbc")
}
