//! Key layout on the contract store.

use anticheat_types::RecordId;

/// Key of the JSON array listing every record id.
pub const INDEX_KEY: &str = "record_keys";

/// Prefix of per-record keys.
pub const RECORD_KEY_PREFIX: &str = "record_";

/// Key holding the JSON envelope of record `id`.
pub fn record_key(id: &RecordId) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}
