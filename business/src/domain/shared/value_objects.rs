use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque token grouping every product flagged by one review request.
/// Nothing in the core reads it back; it exists for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(String);

/// Placeholder for rows flagged for review without a stored batch token.
const UNBATCHED: &str = "UNBATCHED";

impl BatchId {
    /// Creates a new BatchId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a token of the form `BATCH-<n>` with `n` in `0..10000`.
    pub fn generate() -> Self {
        let suffix: u32 = rand::rng().random_range(0..10_000);
        Self(format!("BATCH-{}", suffix))
    }

    pub fn unbatched() -> Self {
        Self(UNBATCHED.to_string())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BatchId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BatchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
