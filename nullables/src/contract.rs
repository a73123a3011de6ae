//! Nullable contract: thread-safe in-memory key/value store for testing.

use anticheat_store::{ContractAccessor, StoreError};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Default address reported by [`NullContract::address`].
pub const NULL_CONTRACT_ADDRESS: &str = "0x00000000000000000000000000000000c0ffee00";

/// An in-memory contract store.
///
/// Besides plain storage it can:
/// - report itself unavailable,
/// - reject every write as if the user declined the transaction,
/// - inject writes from a simulated concurrent client right before the
///   next conditional write to a key.
pub struct NullContract {
    address: String,
    data: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    reject_writes: AtomicBool,
    writes: Mutex<Vec<String>>,
    interleaved: Mutex<HashMap<String, VecDeque<Vec<u8>>>>,
}

impl NullContract {
    pub fn new() -> Self {
        Self {
            address: NULL_CONTRACT_ADDRESS.to_string(),
            data: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            reject_writes: AtomicBool::new(false),
            writes: Mutex::new(Vec::new()),
            interleaved: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with [`StoreError::Rejected`].
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Seed a key directly, bypassing the write log.
    pub fn insert(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.into());
    }

    /// Current bytes under `key` (empty if absent).
    pub fn raw(&self, key: &str) -> Vec<u8> {
        self.data
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Current bytes under `key` as a UTF-8 string.
    pub fn raw_str(&self, key: &str) -> String {
        String::from_utf8(self.raw(key)).unwrap()
    }

    /// Keys written through the accessor, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// Before the next conditional write to `key`, another client writes `value`.
    ///
    /// Queued values are consumed one per conditional write attempt.
    pub fn interleave_write(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.interleaved
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(value.into());
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            Err(StoreError::Rejected)
        } else {
            Ok(())
        }
    }
}

impl Default for NullContract {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractAccessor for NullContract {
    async fn address(&self) -> Result<String, StoreError> {
        Ok(self.address.clone())
    }

    async fn is_available(&self) -> Result<bool, StoreError> {
        Ok(self.available.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        Ok(self.raw(key))
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check_writable()?;
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        self.writes.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn set_data_if(
        &self,
        key: &str,
        expected: &[u8],
        value: &[u8],
    ) -> Result<bool, StoreError> {
        self.check_writable()?;
        let mut data = self.data.lock().unwrap();

        let injected = self
            .interleaved
            .lock()
            .unwrap()
            .get_mut(key)
            .and_then(VecDeque::pop_front);
        if let Some(other) = injected {
            data.insert(key.to_string(), other);
        }

        let current = data.get(key).map(Vec::as_slice).unwrap_or_default();
        if current != expected {
            return Ok(false);
        }
        data.insert(key.to_string(), value.to_vec());
        self.writes.lock().unwrap().push(key.to_string());
        Ok(true)
    }
}
