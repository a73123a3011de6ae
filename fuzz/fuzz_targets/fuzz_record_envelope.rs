#![no_main]

use libfuzzer_sys::fuzz_target;

use anticheat_store::{parse_index, RecordEnvelope};
use anticheat_types::RecordId;

// Stored bytes come from any client of the contract; parsing must not panic.
fuzz_target!(|data: &[u8]| {
    let _ = parse_index(data);

    if let Ok(envelope) = RecordEnvelope::from_bytes(data) {
        let bytes = envelope.to_bytes().expect("parsed envelope serializes");
        let reparsed = RecordEnvelope::from_bytes(&bytes).expect("serialized envelope parses");
        let _ = reparsed.into_record(RecordId::new("fuzz"));
    }
});
