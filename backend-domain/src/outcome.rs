// Fetch outcome
// Explicit result of a data-source lookup so callers branch on the variant, not on null

use thiserror::Error;

/// Why an upstream call produced no usable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("upstream transport failure: {0}")]
    Transport(String),
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("upstream payload could not be decoded: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status(404))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Fresh from the upstream API.
    Live(T),
    Cached(T),
    /// Synthesized, either because mock mode is on or as a fallback.
    Mock(T),
    NotFound,
    Failed(UpstreamError),
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Live(value) | Fetched::Cached(value) | Fetched::Mock(value) => Some(value),
            Fetched::NotFound | Fetched::Failed(_) => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Fetched::Live(value) | Fetched::Cached(value) | Fetched::Mock(value) => Some(value),
            Fetched::NotFound | Fetched::Failed(_) => None,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Fetched::Mock(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Fetched::Live(_) => "live",
            Fetched::Cached(_) => "cache",
            Fetched::Mock(_) => "mock",
            Fetched::NotFound => "not_found",
            Fetched::Failed(_) => "failed",
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(value) => Fetched::Live(f(value)),
            Fetched::Cached(value) => Fetched::Cached(f(value)),
            Fetched::Mock(value) => Fetched::Mock(f(value)),
            Fetched::NotFound => Fetched::NotFound,
            Fetched::Failed(err) => Fetched::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_variants_have_no_value() {
        let missing: Fetched<u32> = Fetched::NotFound;
        assert_eq!(missing.value(), None);
        let failed: Fetched<u32> = Fetched::Failed(UpstreamError::Status(503));
        assert_eq!(failed.label(), "failed");
        assert_eq!(failed.into_option(), None);
    }

    #[test]
    fn map_keeps_the_variant() {
        let mapped = Fetched::Mock(vec![1, 2, 3]).map(|items| items.len());
        assert_eq!(mapped, Fetched::Mock(3));
        assert!(mapped.is_mock());
        assert_eq!(Fetched::Cached("x").map(str::len).into_option(), Some(1));
    }

    #[test]
    fn only_status_404_counts_as_not_found() {
        assert!(UpstreamError::Status(404).is_not_found());
        assert!(!UpstreamError::Status(500).is_not_found());
        assert!(!UpstreamError::Transport("timeout".to_string()).is_not_found());
    }
}
