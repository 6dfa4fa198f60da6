//! PKCS#7 padding (RFC 5652 §6.3).
//!
//! Padding is always added: an input that is already block aligned gains a
//! full block of padding, so unpadding is unambiguous.

use aesmodes_types::CryptoError;
use subtle::{Choice, ConstantTimeEq};

fn check_block_size(block_size: usize) -> Result<(), CryptoError> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(CryptoError::InvalidBlockSize { got: block_size });
    }
    Ok(())
}

/// Pad `data` to a multiple of `block_size` bytes.
///
/// Appends `block_size - (len % block_size)` bytes, each holding that count.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
    check_block_size(block_size)?;
    let pad_len = block_size - (data.len() % block_size);
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// The padding length is public, so the range checks may exit early; the
/// content of the padding run is compared without branching on each byte.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8], CryptoError> {
    check_block_size(block_size)?;
    let pad_val = *data.last().ok_or(CryptoError::InvalidPadding)? as usize;
    if pad_val == 0 || pad_val > block_size || pad_val > data.len() {
        return Err(CryptoError::InvalidPadding);
    }
    let pad_byte = pad_val as u8;
    let split = data.len() - pad_val;
    let mut valid = Choice::from(1u8);
    for b in &data[split..] {
        valid &= b.ct_eq(&pad_byte);
    }
    if !bool::from(valid) {
        return Err(CryptoError::InvalidPadding);
    }
    Ok(&data[..split])
}
