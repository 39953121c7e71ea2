use serde::Serialize;

use crate::classify::{Mood, MoodResult};
use crate::sentiment::SentimentLabel;

/// The single glyph shown next to a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodIndicator {
    pub glyph: &'static str,
    pub color_class: &'static str,
    pub tooltip: String,
}

impl MoodIndicator {
    /// Pick the indicator: the dominant mood if any, otherwise the score.
    #[must_use]
    pub fn select(mood: &MoodResult, score: f64) -> Self {
        match mood.dominant() {
            Some(mood) => Self::for_mood(mood, score),
            None => Self::for_score(score),
        }
    }

    /// Indicator for a detected mood.
    #[must_use]
    pub fn for_mood(mood: Mood, score: f64) -> Self {
        let (glyph, color_class) = match mood {
            Mood::Excited => ("\u{1F929}", "mood-excited"),
            Mood::Confused => ("\u{1F615}", "mood-confused"),
            Mood::Frustrated => ("\u{1F624}", "mood-frustrated"),
            Mood::Uncertain => ("\u{1F914}", "mood-uncertain"),
        };
        Self {
            glyph,
            color_class,
            tooltip: tooltip(mood.label(), score),
        }
    }

    /// Indicator from the sentiment score alone.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        let label = SentimentLabel::from_score(score);
        let (glyph, color_class) = match label {
            SentimentLabel::Negative => ("\u{1F61F}", "sentiment-negative"),
            SentimentLabel::Positive => ("\u{1F642}", "sentiment-positive"),
            SentimentLabel::Neutral => ("\u{1F610}", "sentiment-neutral"),
        };
        Self {
            glyph,
            color_class,
            tooltip: tooltip(label.label(), score),
        }
    }
}

fn tooltip(label: &str, score: f64) -> String {
    format!("{label} (score {score:.2})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_neutral_fallback() {
        let indicator = MoodIndicator::select(&classify("hi"), 0.0);
        assert_eq!(
            indicator,
            MoodIndicator {
                glyph: "\u{1F610}",
                color_class: "sentiment-neutral",
                tooltip: "Neutral (score 0.00)".to_owned(),
            }
        );
    }

    #[test]
    fn test_score_buckets() {
        assert_eq!(MoodIndicator::for_score(-0.25).color_class, "sentiment-negative");
        assert_eq!(MoodIndicator::for_score(0.3).color_class, "sentiment-positive");
        assert_eq!(MoodIndicator::for_score(0.1).color_class, "sentiment-neutral");
    }

    #[test]
    fn test_mood_beats_score() {
        let mood = MoodResult {
            is_frustrated: true,
            ..MoodResult::default()
        };
        let indicator = MoodIndicator::select(&mood, 0.9);
        assert_eq!(indicator.glyph, "\u{1F624}");
        assert_eq!(indicator.color_class, "mood-frustrated");
        assert_eq!(indicator.tooltip, "Frustrated (score 0.90)");
    }

    #[test]
    fn test_excitement_has_highest_precedence() {
        let mood = MoodResult {
            is_confused: true,
            is_frustrated: true,
            is_excited: true,
            is_uncertain: true,
        };
        assert_eq!(MoodIndicator::select(&mood, -1.0).color_class, "mood-excited");
    }

    #[test]
    fn test_tooltip_rounds_to_two_decimals() {
        assert_eq!(MoodIndicator::for_score(-0.456).tooltip, "Negative (score -0.46)");
    }

    #[test]
    fn test_serializes_color_class_camel_case() {
        let json = serde_json::to_value(MoodIndicator::for_score(0.5)).unwrap();
        assert_eq!(json["colorClass"], "sentiment-positive");
        assert_eq!(json["glyph"], "\u{1F642}");
    }
}
