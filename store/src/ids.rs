//! Random suffixes for record ids.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part of a record id.
pub const SUFFIX_LEN: usize = 7;

/// Source of the random part of new record ids.
pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> String;
}

/// Seven random base-36 characters from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}
