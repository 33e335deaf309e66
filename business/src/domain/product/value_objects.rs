use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::BatchId;

/// Untyped price as it arrives from forms, imports and JSON bodies.
///
/// Deserializes from `number | string | null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        PriceInput::Text(value)
    }
}

impl<T: Into<PriceInput>> From<Option<T>> for PriceInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PriceInput::Absent)
    }
}

/// Canonical catalog price. Only [`sanitize`] builds one from external input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    Priced(f64),
    #[default]
    Unpriced,
}

impl Price {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Priced(value) => Some(*value),
            Price::Unpriced => None,
        }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self, Price::Priced(_))
    }

    /// Repository rows store the price as a nullable number.
    pub fn from_column(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Price::Priced(v),
            _ => Price::Unpriced,
        }
    }
}

/// Normalizes external price input.
///
/// Numbers pass through untouched (non-finite ones are dropped). Text has
/// every comma removed, is trimmed, then parsed; anything left unparsable
/// yields [`Price::Unpriced`]. Never fails.
pub fn sanitize(input: &PriceInput) -> Price {
    match input {
        PriceInput::Absent => Price::Unpriced,
        PriceInput::Number(value) => Price::from_column(Some(*value)),
        PriceInput::Text(text) => {
            let cleaned = text.replace(',', "");
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return Price::Unpriced;
            }
            Price::from_column(cleaned.parse::<f64>().ok())
        }
    }
}

/// Review lifecycle of a product. A batch token exists exactly while pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ReviewState {
    #[default]
    Normal,
    PendingReview { batch_id: BatchId },
}

impl ReviewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ReviewState::PendingReview { .. })
    }

    pub fn batch_id(&self) -> Option<&BatchId> {
        match self {
            ReviewState::PendingReview { batch_id } => Some(batch_id),
            ReviewState::Normal => None,
        }
    }

    /// Rebuilds the state from the `is_review_requested` / `review_batch_id`
    /// column pair. The flag wins over a dangling or missing token.
    pub fn from_columns(is_review_requested: bool, review_batch_id: Option<String>) -> Self {
        if !is_review_requested {
            return ReviewState::Normal;
        }
        ReviewState::PendingReview {
            batch_id: review_batch_id
                .filter(|b| !b.is_empty())
                .map(BatchId::new)
                .unwrap_or_else(BatchId::unbatched),
        }
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewState::Normal => write!(f, "normal"),
            ReviewState::PendingReview { .. } => write!(f, "pending_review"),
        }
    }
}
