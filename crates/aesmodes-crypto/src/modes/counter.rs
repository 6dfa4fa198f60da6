//! Counter blocks shared by CTR and CCM.
//!
//! Both modes encrypt successive counter blocks to obtain a keystream and
//! differ only in how the block is laid out:
//!
//! - CTR: the whole 16-byte block is a big-endian counter seeded from the IV.
//! - CCM: `flags (L-1) || nonce || counter`, where only the trailing `L`
//!   bytes count (NIST SP 800-38C §A.3).
//!
//! Incrementing only ever touches the counter field and wraps silently.

use aesmodes_types::{CryptoError, BLOCK_SIZE};
use zeroize::Zeroize;

use super::xor_in_place;
use crate::provider::BlockCipher;

/// A counter block together with the width of its counter field.
#[derive(Clone)]
pub(crate) struct CounterBlock {
    block: [u8; BLOCK_SIZE],
    width: usize,
}

impl CounterBlock {
    /// A full-width counter initialized from a 16-byte IV.
    pub(crate) fn from_iv(iv: &[u8]) -> Result<Self, CryptoError> {
        let block: [u8; BLOCK_SIZE] = iv.try_into().map_err(|_| CryptoError::InvalidIvLength {
            expected: BLOCK_SIZE,
            got: iv.len(),
        })?;
        Ok(Self {
            block,
            width: BLOCK_SIZE,
        })
    }

    /// A CCM counter block `A_i` for a 7..=13 byte nonce.
    ///
    /// The caller validates the nonce length.
    pub(crate) fn ccm(nonce: &[u8], counter: u64) -> Self {
        let l = BLOCK_SIZE - 1 - nonce.len();
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = (l - 1) as u8;
        block[1..1 + nonce.len()].copy_from_slice(nonce);
        let counter_bytes = counter.to_be_bytes();
        block[BLOCK_SIZE - l..].copy_from_slice(&counter_bytes[counter_bytes.len() - l..]);
        Self { block, width: l }
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.block
    }

    /// Increment the counter field as a big-endian integer.
    pub(crate) fn increment(&mut self) {
        for byte in self.block[BLOCK_SIZE - self.width..].iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    /// Encrypt the current counter value without advancing it.
    pub(crate) fn keystream<C: BlockCipher + ?Sized>(
        &self,
        cipher: &C,
    ) -> Result<[u8; BLOCK_SIZE], CryptoError> {
        let mut ks = self.block;
        cipher.encrypt_block(&mut ks)?;
        Ok(ks)
    }

    /// XOR `data` with the keystream starting at the current counter,
    /// advancing the counter once per (possibly partial) block.
    pub(crate) fn apply_keystream<C: BlockCipher + ?Sized>(
        &mut self,
        cipher: &C,
        data: &mut [u8],
    ) -> Result<(), CryptoError> {
        for chunk in data.chunks_mut(BLOCK_SIZE) {
            let mut ks = self.keystream(cipher)?;
            xor_in_place(chunk, &ks[..chunk.len()]);
            ks.zeroize();
            self.increment();
        }
        Ok(())
    }
}

impl Drop for CounterBlock {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
