//! Sentiment classification supplied by the message layer.

use serde::{Deserialize, Serialize};

/// Score below which a message reads as negative.
const NEGATIVE_THRESHOLD: f64 = -0.1;
/// Score above which a message reads as positive.
const POSITIVE_THRESHOLD: f64 = 0.1;

/// Coarse sentiment label.
///
/// Deserialization is case-insensitive and maps unknown labels to
/// [`SentimentLabel::Neutral`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SentimentLabel {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Bucket a numeric score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "negative" => Self::Negative,
            "positive" => Self::Positive,
            _ => Self::Neutral,
        }
    }
}

/// Sentiment attached to a message: `{score, label, isAiResponse}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub label: SentimentLabel,
    #[serde(default)]
    pub is_ai_response: bool,
}

impl Sentiment {
    /// Sentiment for a user-authored message, labelled from its score.
    #[must_use]
    pub fn user(score: f64) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
            is_ai_response: false,
        }
    }

    /// Sentiment for an AI response, labelled from its score.
    #[must_use]
    pub fn ai(score: f64) -> Self {
        Self {
            is_ai_response: true,
            ..Self::user(score)
        }
    }
}
