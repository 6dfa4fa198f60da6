#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(unpadded) = aesmodes_crypto::modes::padding::pkcs7_unpad(data, 16) {
        let pad = data.len() - unpadded.len();
        assert!((1..=16).contains(&pad));
        assert!(data[unpadded.len()..].iter().all(|&b| b as usize == pad));
    }
});
