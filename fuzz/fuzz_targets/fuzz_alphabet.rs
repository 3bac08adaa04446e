#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::utils::{decode, encode, encode_query, encode_token};

fuzz_target!(|data: &str| {
    // Encoding must never alias a foreign character to a valid code
    for ch in data.chars() {
        if let Some(code) = encode(ch) {
            let back = decode(code).unwrap();
            assert_eq!(back, ch.to_ascii_uppercase());
        }
    }
    let _ = encode_token(data);
    let _ = encode_query(data);
});
