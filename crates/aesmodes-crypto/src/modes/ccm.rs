//! CCM (Counter with CBC-MAC) authenticated encryption.
//!
//! Follows the NIST SP 800-38C construction with two fixed choices:
//! the tag is always 16 bytes, and the associated-data length is always
//! framed as a 2-byte big-endian prefix (so at most 65535 bytes of AAD).
//!
//! Output layout is `ciphertext || encrypted tag`; the ciphertext has the
//! same length as the plaintext.

use aesmodes_types::{CryptoError, BLOCK_SIZE};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::counter::CounterBlock;
use super::xor_in_place;
use crate::aes::AesKey;
use crate::provider::BlockCipher;

/// Authentication tag length in bytes.
pub const CCM_TAG_LEN: usize = 16;

/// Shortest accepted nonce (L = 8).
pub const CCM_MIN_NONCE_LEN: usize = 7;

/// Longest accepted nonce (L = 2).
pub const CCM_MAX_NONCE_LEN: usize = 13;

/// Longest associated data that fits the 2-byte length prefix.
pub const CCM_MAX_AAD_LEN: usize = u16::MAX as usize;

// ---------------------------------------------------------------------------
// AES-CCM public API
// ---------------------------------------------------------------------------

/// Encrypt and authenticate data using AES-128-CCM.
///
/// # Parameters
/// - `key`: AES-128 key (16 bytes).
/// - `nonce`: Nonce (7-13 bytes). Shorter nonces allow longer messages.
/// - `aad`: Additional authenticated data (at most 65535 bytes).
/// - `plaintext`: Data to encrypt.
///
/// # Returns
/// Ciphertext || tag (16 bytes).
pub fn ccm_encrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    ccm_encrypt_with(&cipher, nonce, aad, plaintext)
}

/// Decrypt and verify data using AES-128-CCM.
///
/// No plaintext is returned unless the tag verifies.
pub fn ccm_decrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = AesKey::new(key)?;
    ccm_decrypt_with(&cipher, nonce, aad, ciphertext)
}

// ---------------------------------------------------------------------------
// Generic CCM implementation
// ---------------------------------------------------------------------------

/// CCM encryption with an initialized block cipher.
pub fn ccm_encrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    validate_params(nonce, aad, plaintext.len())?;

    // Step 1: CBC-MAC over B0 || AAD || plaintext
    let mut tag = cbc_mac(cipher, nonce, aad, plaintext)?;

    // Step 2: CTR encryption starting from counter 1
    let mut ciphertext = Vec::with_capacity(plaintext.len() + CCM_TAG_LEN);
    ciphertext.extend_from_slice(plaintext);
    CounterBlock::ccm(nonce, 1).apply_keystream(cipher, &mut ciphertext)?;

    // Step 3: encrypt the tag with S0
    let mut s0 = CounterBlock::ccm(nonce, 0).keystream(cipher)?;
    xor_in_place(&mut tag, &s0);
    ciphertext.extend_from_slice(&tag[..CCM_TAG_LEN]);

    tag.zeroize();
    s0.zeroize();
    tracing::trace!(mode = "ccm", len = plaintext.len(), aad_len = aad.len(), "sealed");
    Ok(ciphertext)
}

/// CCM decryption with an initialized block cipher.
pub fn ccm_decrypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.len() < CCM_TAG_LEN {
        tracing::debug!(mode = "ccm", len = ciphertext.len(), "ciphertext shorter than tag");
        return Err(CryptoError::CiphertextTooShort {
            min: CCM_TAG_LEN,
            got: ciphertext.len(),
        });
    }
    let ct_len = ciphertext.len() - CCM_TAG_LEN;
    validate_params(nonce, aad, ct_len)?;

    let (ct_data, encrypted_tag) = ciphertext.split_at(ct_len);

    // Step 1: recover the received tag with S0
    let mut received_tag = CounterBlock::ccm(nonce, 0).keystream(cipher)?;
    xor_in_place(&mut received_tag, encrypted_tag);

    // Step 2: CTR decryption starting from counter 1
    let mut plaintext = ct_data.to_vec();
    CounterBlock::ccm(nonce, 1).apply_keystream(cipher, &mut plaintext)?;

    // Step 3: recompute the tag over the recovered plaintext
    let mut expected_tag = cbc_mac(cipher, nonce, aad, &plaintext)?;

    let verified = bool::from(expected_tag[..].ct_eq(&received_tag[..]));
    expected_tag.zeroize();
    received_tag.zeroize();
    if !verified {
        plaintext.zeroize();
        tracing::debug!(mode = "ccm", len = ct_len, "tag verification failed");
        return Err(CryptoError::AeadTagVerifyFail);
    }
    Ok(plaintext)
}

fn validate_params(nonce: &[u8], aad: &[u8], payload_len: usize) -> Result<(), CryptoError> {
    if !(CCM_MIN_NONCE_LEN..=CCM_MAX_NONCE_LEN).contains(&nonce.len()) {
        tracing::debug!(mode = "ccm", len = nonce.len(), "rejected nonce length");
        return Err(CryptoError::InvalidNonceLength {
            min: CCM_MIN_NONCE_LEN,
            max: CCM_MAX_NONCE_LEN,
            got: nonce.len(),
        });
    }
    if aad.len() > CCM_MAX_AAD_LEN {
        return Err(CryptoError::AadTooLong {
            max: CCM_MAX_AAD_LEN,
            got: aad.len(),
        });
    }
    let max = max_payload_len(nonce.len());
    if payload_len as u64 > max {
        return Err(CryptoError::PayloadTooLong {
            max,
            got: payload_len,
        });
    }
    Ok(())
}

/// Largest payload whose length fits the L-byte field of B0.
fn max_payload_len(nonce_len: usize) -> u64 {
    let l = BLOCK_SIZE - 1 - nonce_len;
    if l >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * l)) - 1
    }
}

/// Format B0: flags || nonce || Q (payload length, big-endian in L bytes).
fn format_b0(nonce: &[u8], has_aad: bool, payload_len: usize) -> [u8; BLOCK_SIZE] {
    let l = BLOCK_SIZE - 1 - nonce.len();
    let mut b0 = [0u8; BLOCK_SIZE];
    let adata_field = if has_aad { 0x40u8 } else { 0 };
    let t_field = (((CCM_TAG_LEN - 2) / 2) as u8) << 3;
    let q_field = (l - 1) as u8;
    b0[0] = adata_field | t_field | q_field;
    b0[1..1 + nonce.len()].copy_from_slice(nonce);

    let len_bytes = (payload_len as u64).to_be_bytes();
    b0[BLOCK_SIZE - l..].copy_from_slice(&len_bytes[len_bytes.len() - l..]);
    b0
}

/// One CBC-MAC pass over `data`, zero-padding the final partial block.
fn cbc_mac_update<C: BlockCipher + ?Sized>(
    cipher: &C,
    x: &mut [u8; BLOCK_SIZE],
    data: &[u8],
) -> Result<(), CryptoError> {
    for chunk in data.chunks(BLOCK_SIZE) {
        xor_in_place(&mut x[..chunk.len()], chunk);
        cipher.encrypt_block(x)?;
    }
    Ok(())
}

/// Compute the (unencrypted) CBC-MAC tag for CCM.
fn cbc_mac<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    // X_1 = E_K(B_0)
    let mut x = format_b0(nonce, !aad.is_empty(), plaintext.len());
    cipher.encrypt_block(&mut x)?;

    if !aad.is_empty() {
        let mut aad_encoded = Vec::with_capacity(2 + aad.len());
        aad_encoded.extend_from_slice(&(aad.len() as u16).to_be_bytes());
        aad_encoded.extend_from_slice(aad);
        cbc_mac_update(cipher, &mut x, &aad_encoded)?;
    }

    cbc_mac_update(cipher, &mut x, plaintext)?;
    Ok(x)
}
