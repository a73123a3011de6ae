//! Nullable randomness: predictable record id suffixes.

use anticheat_store::SuffixSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Returns `0000001`, `0000002`, … in order.
pub struct SequentialSuffix {
    next: AtomicU64,
}

impl SequentialSuffix {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixSource for SequentialSuffix {
    fn next_suffix(&self) -> String {
        format!("{:07}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}
