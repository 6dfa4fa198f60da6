use crate::algorithm::CipherMode;

/// Coarse classification of a [`CryptoError`].
///
/// Callers that only need to decide how to react (bad key, bad framing,
/// corrupted data, forged data) should match on this rather than on the
/// full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The underlying block cipher rejected the key.
    CipherInit,
    /// An IV, nonce, ciphertext or associated-data length is structurally invalid.
    Length,
    /// PKCS#7 padding was malformed after decryption.
    Padding,
    /// The CCM authentication tag did not verify.
    Authentication,
    /// The caller asked for something the API cannot do (unknown mode, missing nonce).
    Usage,
    /// The randomness source failed.
    Random,
}

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // Cipher initialization
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    // Length errors
    #[error("invalid iv length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("invalid nonce length: expected {min}..={max}, got {got}")]
    InvalidNonceLength { min: usize, max: usize, got: usize },
    #[error("ciphertext length {got} is not a multiple of the block size {block_size}")]
    InvalidCiphertextLength { block_size: usize, got: usize },
    #[error("ciphertext too short: need at least {min}, got {got}")]
    CiphertextTooShort { min: usize, got: usize },
    #[error("invalid block length: expected {expected}, got {got}")]
    InvalidBlockLength { expected: usize, got: usize },
    #[error("invalid padding block size {got}: must be 1..=255")]
    InvalidBlockSize { got: usize },
    #[error("associated data too long: max {max}, got {got}")]
    AadTooLong { max: usize, got: usize },
    #[error("payload too long for nonce size: max {max}, got {got}")]
    PayloadTooLong { max: u64, got: usize },

    // Integrity errors
    #[error("invalid padding")]
    InvalidPadding,
    #[error("aead: tag verification failed")]
    AeadTagVerifyFail,

    // Usage errors
    #[error("nonce is required for {mode} mode")]
    MissingNonce { mode: CipherMode },
    #[error("unsupported mode: {0}")]
    UnknownMode(String),
    #[error("{mode} mode is not enabled in this build")]
    ModeDisabled { mode: CipherMode },

    // Randomness errors
    #[error("random generation failed")]
    RandGenFail,
}

impl CryptoError {
    /// Return the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::InvalidKeyLength { .. } => ErrorKind::CipherInit,
            CryptoError::InvalidIvLength { .. }
            | CryptoError::InvalidNonceLength { .. }
            | CryptoError::InvalidCiphertextLength { .. }
            | CryptoError::CiphertextTooShort { .. }
            | CryptoError::InvalidBlockLength { .. }
            | CryptoError::InvalidBlockSize { .. }
            | CryptoError::AadTooLong { .. }
            | CryptoError::PayloadTooLong { .. } => ErrorKind::Length,
            CryptoError::InvalidPadding => ErrorKind::Padding,
            CryptoError::AeadTagVerifyFail => ErrorKind::Authentication,
            CryptoError::MissingNonce { .. }
            | CryptoError::UnknownMode(_)
            | CryptoError::ModeDisabled { .. } => ErrorKind::Usage,
            CryptoError::RandGenFail => ErrorKind::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CryptoError::InvalidKeyLength { expected: 16, got: 15 }.kind(),
            ErrorKind::CipherInit
        );
        assert_eq!(
            CryptoError::InvalidNonceLength { min: 7, max: 13, got: 6 }.kind(),
            ErrorKind::Length
        );
        assert_eq!(CryptoError::InvalidPadding.kind(), ErrorKind::Padding);
        assert_eq!(CryptoError::AeadTagVerifyFail.kind(), ErrorKind::Authentication);
        assert_eq!(
            CryptoError::MissingNonce { mode: CipherMode::Ccm }.kind(),
            ErrorKind::Usage
        );
        assert_eq!(CryptoError::RandGenFail.kind(), ErrorKind::Random);
    }

    #[test]
    fn test_error_messages() {
        let err = CryptoError::InvalidIvLength { expected: 16, got: 12 };
        assert_eq!(err.to_string(), "invalid iv length: expected 16, got 12");
        let err = CryptoError::MissingNonce { mode: CipherMode::Cbc };
        assert_eq!(err.to_string(), "nonce is required for CBC mode");
    }
}
