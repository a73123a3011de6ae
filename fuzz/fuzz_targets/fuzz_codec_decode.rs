#![no_main]

use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text must never panic, with or without the token prefix.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = anticheat_crypto::decode(text) {
        // Anything that decodes re-encodes to a token that decodes the same.
        let token = anticheat_crypto::encode(value);
        let again = anticheat_crypto::decode(&token).expect("re-encoded token decodes");
        assert!(again == value || (again.is_nan() && value.is_nan()));
    }

    let prefixed = format!("{}{text}", anticheat_crypto::TOKEN_PREFIX);
    let _ = anticheat_crypto::decode(&prefixed);
    let _ = anticheat_crypto::preview(text, 50);
});
