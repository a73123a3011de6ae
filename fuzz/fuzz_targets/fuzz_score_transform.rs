#![no_main]

use libfuzzer_sys::fuzz_target;

use anticheat_crypto::{encode, transform, ScoreOp};

// Score transforms on arbitrary values and operation names.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = f64::from_le_bytes([
        data[0], data[1], data[2], data[3],
        data[4], data[5], data[6], data[7],
    ]);
    let op = ScoreOp::from(String::from_utf8_lossy(&data[8..]).as_ref());

    let token = encode(value);
    if let Ok(next) = transform(&token, op) {
        let _ = anticheat_crypto::decode(&next);
    }
});
