#![no_main]
use libfuzzer_sys::fuzz_target;

const KEY: [u8; 16] = [0x42; 16];
const IV: [u8; 16] = [0x24; 16];

fuzz_target!(|data: &[u8]| {
    if let Ok(pt) = aesmodes_crypto::modes::cbc::cbc_decrypt(&KEY, &IV, data) {
        // Anything that decrypts must re-encrypt to the same bytes.
        let ct = aesmodes_crypto::modes::cbc::cbc_encrypt(&KEY, &IV, &pt).unwrap();
        assert_eq!(ct, data);
    }
});
