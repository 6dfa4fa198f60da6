//! Block cipher modes of operation.
//!
//! This module provides ECB, CBC, CTR and CCM over a 128-bit block cipher,
//! plus PKCS#7 padding. Each mode operates on top of a block cipher through
//! the [`BlockCipher`](crate::provider::BlockCipher) trait; the key-taking
//! entry points use AES-128.
//!
//! [`encrypt`] and [`decrypt`] select a mode at runtime from a
//! [`CipherMode`].

pub mod padding;

#[cfg(any(feature = "ctr", feature = "ccm"))]
mod counter;

#[cfg(feature = "cbc")]
pub mod cbc;
#[cfg(feature = "ccm")]
pub mod ccm;
#[cfg(feature = "ctr")]
pub mod ctr;
#[cfg(feature = "ecb")]
pub mod ecb;

use aesmodes_types::{CipherMode, CryptoError};

/// XOR `src` into `dst`. Both slices must have the same length.
#[cfg(any(feature = "cbc", feature = "ctr", feature = "ccm"))]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Remove PKCS#7 padding from a decrypted buffer, wiping it on failure.
#[cfg(any(feature = "ecb", feature = "cbc"))]
pub(crate) fn strip_padding(
    mut output: Vec<u8>,
    mode: &'static str,
) -> Result<Vec<u8>, CryptoError> {
    use zeroize::Zeroize;

    match padding::pkcs7_unpad(&output, aesmodes_types::BLOCK_SIZE).map(<[u8]>::len) {
        Ok(len) => {
            output.truncate(len);
            tracing::trace!(mode, len, "decrypted");
            Ok(output)
        }
        Err(e) => {
            output.zeroize();
            tracing::debug!(mode, "invalid padding");
            Err(e)
        }
    }
}

#[cfg(any(feature = "cbc", feature = "ctr", feature = "ccm"))]
fn require_nonce(mode: CipherMode, nonce: Option<&[u8]>) -> Result<&[u8], CryptoError> {
    nonce.ok_or(CryptoError::MissingNonce { mode })
}

/// Encrypt `data` under `mode` with an AES-128 `key`.
///
/// `nonce` is the IV for CBC/CTR and the nonce for CCM; it is ignored for
/// ECB. CCM is used with empty associated data.
#[allow(unused_variables)]
pub fn encrypt(
    mode: CipherMode,
    key: &[u8],
    nonce: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match mode {
        #[cfg(feature = "ecb")]
        CipherMode::Ecb => ecb::ecb_encrypt(key, data),
        #[cfg(feature = "cbc")]
        CipherMode::Cbc => cbc::cbc_encrypt(key, require_nonce(mode, nonce)?, data),
        #[cfg(feature = "ctr")]
        CipherMode::Ctr => ctr::ctr_encrypt(key, require_nonce(mode, nonce)?, data),
        #[cfg(feature = "ccm")]
        CipherMode::Ccm => ccm::ccm_encrypt(key, require_nonce(mode, nonce)?, &[], data),
        #[allow(unreachable_patterns)]
        _ => Err(CryptoError::ModeDisabled { mode }),
    }
}

/// Decrypt `data` under `mode` with an AES-128 `key`.
///
/// The inverse of [`encrypt`]; CCM input must carry its 16-byte tag.
#[allow(unused_variables)]
pub fn decrypt(
    mode: CipherMode,
    key: &[u8],
    nonce: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match mode {
        #[cfg(feature = "ecb")]
        CipherMode::Ecb => ecb::ecb_decrypt(key, data),
        #[cfg(feature = "cbc")]
        CipherMode::Cbc => cbc::cbc_decrypt(key, require_nonce(mode, nonce)?, data),
        #[cfg(feature = "ctr")]
        CipherMode::Ctr => ctr::ctr_decrypt(key, require_nonce(mode, nonce)?, data),
        #[cfg(feature = "ccm")]
        CipherMode::Ccm => ccm::ccm_decrypt(key, require_nonce(mode, nonce)?, &[], data),
        #[allow(unreachable_patterns)]
        _ => Err(CryptoError::ModeDisabled { mode }),
    }
}
