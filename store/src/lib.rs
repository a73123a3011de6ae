//! Record storage on top of a generic contract key/value accessor.
//!
//! The contract exposes string-keyed byte blobs. This crate lays cheat
//! records out on it as one JSON blob per record plus a JSON index listing
//! every record id, and provides [`RecordStore`] to list, create and advance
//! records. The rest of the codebase depends only on [`ContractAccessor`],
//! so tests run against the in-memory contract from `anticheat-nullables`.

pub mod contract;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod keys;
pub mod records;

pub use contract::ContractAccessor;
pub use envelope::{parse_index, RecordEnvelope};
pub use error::StoreError;
pub use ids::{RandomSuffix, SuffixSource};
pub use keys::{record_key, INDEX_KEY, RECORD_KEY_PREFIX};
pub use records::{NewRecord, RecordStore, DEFAULT_INDEX_RETRY_LIMIT};
