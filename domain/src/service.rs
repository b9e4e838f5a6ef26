use tracing::info;

use crate::{CoreError, ParamStorage, StoredValue, SuffixGenerator};

/// Application service orchestrating suffixing and persistence.
///
/// It remains generic over storage and suffix generator so the domain stays
/// testable without external dependencies: tests plug in a fixed-suffix
/// generator and the in-memory adapter.
pub struct ParamService<S: ParamStorage, G: SuffixGenerator> {
    storage: S,
    suffixer: G,
}

impl<S: ParamStorage, G: SuffixGenerator> ParamService<S, G> {
    pub fn new(storage: S, suffixer: G) -> Self {
        Self { storage, suffixer }
    }

    /// Append a random suffix to `param`, persist the concatenation, and
    /// return what storage returned (identity pass-through by contract).
    ///
    /// No validation: empty input and arbitrary characters are accepted.
    pub fn handle(&self, param: &str) -> Result<StoredValue, CoreError> {
        info!(%param, "handling request");
        let value = StoredValue::new(format!("{}{}", param, self.suffixer.next_suffix()));
        self.storage.store(value)
    }

    /// Return the most recently stored value.
    pub fn latest(&self) -> Result<StoredValue, CoreError> {
        self.storage.retrieve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_storage::InMemoryStorage;
    use crate::suffix::{RandomSuffixGenerator, SUFFIX_LENGTH};

    struct FixedSuffix(&'static str);
    impl SuffixGenerator for FixedSuffix {
        fn next_suffix(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn handle_appends_suffix_without_separator() {
        let svc = ParamService::new(InMemoryStorage::new(), FixedSuffix("0123456789"));
        let stored = svc.handle("aaa").expect("stored");
        assert_eq!(stored.as_str(), "aaa0123456789");
    }

    #[test]
    fn handle_accepts_empty_input() {
        let svc = ParamService::new(InMemoryStorage::new(), FixedSuffix("suffix"));
        let stored = svc.handle("").expect("stored");
        assert_eq!(stored.as_str(), "suffix");
    }

    #[test]
    fn handle_with_real_generator_matches_contract() {
        let svc = ParamService::new(InMemoryStorage::new(), RandomSuffixGenerator::default());
        let stored = svc.handle("test text").expect("stored");
        let s = stored.as_str();
        assert!(s.starts_with("test text"));
        let suffix = &s["test text".len()..];
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn latest_returns_most_recent_handle_result() {
        let svc = ParamService::new(InMemoryStorage::new(), FixedSuffix("-x"));
        svc.handle("first").expect("stored");
        let second = svc.handle("second").expect("stored");
        assert_eq!(svc.latest().expect("latest"), second);
    }

    #[test]
    fn latest_on_fresh_service_is_empty_storage() {
        let svc = ParamService::new(InMemoryStorage::new(), FixedSuffix(""));
        let err = svc.latest().unwrap_err();
        assert!(matches!(err, CoreError::EmptyStorage));
    }
}
