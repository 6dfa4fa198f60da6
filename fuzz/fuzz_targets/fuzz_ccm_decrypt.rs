#![no_main]
use libfuzzer_sys::fuzz_target;

const KEY: [u8; 16] = [0x42; 16];

fuzz_target!(|data: &[u8]| {
    // First byte picks the nonce length, then the nonce, then ciphertext || tag.
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let nonce_len = 7 + (n as usize % 7);
    if rest.len() < nonce_len {
        return;
    }
    let (nonce, ct) = rest.split_at(nonce_len);
    let _ = aesmodes_crypto::modes::ccm::ccm_decrypt(&KEY, nonce, b"fuzz", ct);
});
