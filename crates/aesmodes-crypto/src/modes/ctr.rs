//! CTR (Counter) mode of operation.
//!
//! The IV is the initial 128-bit counter value; it is incremented as a
//! big-endian integer per block and wraps silently on overflow.
//! Encryption and decryption are the same operation.

use aesmodes_types::CryptoError;

use super::counter::CounterBlock;
use crate::aes::AesKey;
use crate::provider::BlockCipher;

/// Encrypt or decrypt data in place using CTR mode with AES-128.
/// `iv` must be 16 bytes (used as the initial counter value).
pub fn ctr_crypt(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<(), CryptoError> {
    let cipher = AesKey::new(key)?;
    ctr_crypt_with(&cipher, iv, data)
}

/// CTR keystream application with an initialized block cipher.
pub fn ctr_crypt_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    data: &mut [u8],
) -> Result<(), CryptoError> {
    let mut counter = CounterBlock::from_iv(iv).map_err(|e| {
        tracing::debug!(mode = "ctr", len = iv.len(), "rejected iv length");
        e
    })?;
    counter.apply_keystream(cipher, data)?;
    tracing::trace!(mode = "ctr", len = data.len(), "applied keystream");
    Ok(())
}

/// Encrypt data using CTR mode with AES-128.
pub fn ctr_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut output = plaintext.to_vec();
    ctr_crypt(key, iv, &mut output)?;
    Ok(output)
}

/// Decrypt data using CTR mode with AES-128.
pub fn ctr_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    ctr_encrypt(key, iv, ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_to_bytes(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // NIST SP 800-38A F.5.1: AES-128 CTR
    #[test]
    fn test_ctr_aes128() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex_to_bytes("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
        let pt = hex_to_bytes("6bc1bee22e409f96e93d7e117393172a");
        let expected = "874d6191b620e3261bef6864990db6ce";

        let mut data = pt.clone();
        ctr_crypt(&key, &iv, &mut data).unwrap();
        assert_eq!(hex(&data), expected);

        ctr_crypt(&key, &iv, &mut data).unwrap();
        assert_eq!(data, pt);
    }

    // Multi-block CTR
    #[test]
    fn test_ctr_multi_block() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex_to_bytes("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
        let pt = hex_to_bytes(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e5130c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710",
        );
        let expected = "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff5ae4df3edbd5d35e5b4f09020db03eab1e031dda2fbe03d1792170a0f3009cee";

        let ct = ctr_encrypt(&key, &iv, &pt).unwrap();
        assert_eq!(hex(&ct), expected);
        assert_eq!(ctr_decrypt(&key, &iv, &ct).unwrap(), pt);
    }

    #[test]
    fn test_ctr_zero_vector() {
        let ct = ctr_encrypt(&[0u8; 16], &[0u8; 16], &[0u8; 16]).unwrap();
        assert_eq!(hex(&ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
    }

    #[test]
    fn test_ctr_partial_block() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex_to_bytes("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

        // A 5-byte message consumes the first 5 keystream bytes only.
        let ct = ctr_encrypt(&key, &iv, &[0u8; 5]).unwrap();
        assert_eq!(ct.len(), 5);
        let full = ctr_encrypt(&key, &iv, &[0u8; 16]).unwrap();
        assert_eq!(ct, full[..5]);

        let pt = b"Hello";
        let ct = ctr_encrypt(&key, &iv, pt).unwrap();
        assert_ne!(ct, pt.as_slice());
        assert_eq!(ctr_decrypt(&key, &iv, &ct).unwrap(), pt);
    }

    #[test]
    fn test_ctr_empty() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex_to_bytes("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
        assert!(ctr_encrypt(&key, &iv, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_ctr_counter_wraparound() {
        let key = [0x2bu8; 16];
        let iv = [0xffu8; 16];
        let ct = ctr_encrypt(&key, &iv, &[0u8; 32]).unwrap();

        // Second block is keyed by the wrapped counter 00..00.
        let cipher = AesKey::new(&key).unwrap();
        let mut first = [0xffu8; 16];
        cipher.encrypt_block(&mut first).unwrap();
        let mut second = [0u8; 16];
        cipher.encrypt_block(&mut second).unwrap();
        assert_eq!(ct[..16], first);
        assert_eq!(ct[16..], second);
    }

    #[test]
    fn test_ctr_invalid_iv_length() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
        let mut data = vec![0u8; 16];
        for len in [0usize, 12, 15, 17] {
            assert!(matches!(
                ctr_crypt(&key, &vec![0u8; len], &mut data),
                Err(CryptoError::InvalidIvLength { expected: 16, got }) if got == len
            ));
        }
    }

    #[test]
    fn test_ctr_invalid_key_length() {
        let iv = hex_to_bytes("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
        let mut data = vec![0u8; 16];
        assert!(ctr_crypt(&[0u8; 15], &iv, &mut data).is_err());
        assert!(ctr_crypt(&[0u8; 17], &iv, &mut data).is_err());
        assert!(ctr_crypt(&[], &iv, &mut data).is_err());
    }
}
