//! Suffix generation strategies.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

use crate::SuffixGenerator;

/// Length of the random suffix appended to every input.
pub const SUFFIX_LENGTH: usize = 10;

/// CSPRNG-backed suffix generator. Each character is drawn independently and
/// uniformly from the 62-symbol alphabet a-z, A-Z, 0-9 via the OS random
/// source, so suffixes are unguessable per call.
#[derive(Clone, Copy, Debug)]
pub struct RandomSuffixGenerator {
    length: usize,
}

impl RandomSuffixGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomSuffixGenerator {
    fn default() -> Self {
        Self::new(SUFFIX_LENGTH)
    }
}

impl SuffixGenerator for RandomSuffixGenerator {
    fn next_suffix(&self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
