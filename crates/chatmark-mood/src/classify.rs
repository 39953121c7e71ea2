//! Pattern-based mood detection.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CONFUSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:confus(?:ed|ing|ion)|puzzl(?:ed|ing)|unclear|no idea|huh",
        r"|i'?m lost|i am lost|what do you mean|explain (?:again|that|this)",
        r"|can you (?:explain|clarify)",
        r"|(?:don['’]?t|do not|doesn['’]?t|does not) (?:understand|get it|make sense))\b",
        r"|\?{2,}"
    ))
    .unwrap()
});

static FRUSTRATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:frustrat(?:ed|ing|ion)|annoy(?:ed|ing)|ugh+|argh+|fed up|give up",
        r"|waste of time|useless|stupid|hate",
        r"|(?:still|keeps?) (?:not working|failing|broken|wrong)",
        r"|(?:doesn['’]?t|does not|isn['’]?t|is not|not) work(?:ing)?)\b"
    ))
    .unwrap()
});

static EXCITED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:awesome|amazing|excellent|fantastic|incredible|wonderful|brilliant",
        r"|perfect|love (?:it|this)|excited|thrilled|wow|yay|woo+hoo+",
        r"|finally works?|it works|this is great|great job)\b",
        r"|[\x{1F389}\x{1F973}\x{1F680}\x{1F60D}\x{1F929}]"
    ))
    .unwrap()
});

static UNCERTAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:maybe|perhaps|possibly|probably|unsure|uncertain|not (?:sure|certain)",
        r"|i (?:think|guess|suppose)|might|could be|kind of|sort of)\b"
    ))
    .unwrap()
});

/// A single mood, in display precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excited,
    Confused,
    Frustrated,
    Uncertain,
}

impl Mood {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excited => "Excited",
            Self::Confused => "Confused",
            Self::Frustrated => "Frustrated",
            Self::Uncertain => "Uncertain",
        }
    }
}

/// Moods detected in one message. Any combination may be set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResult {
    pub is_confused: bool,
    pub is_frustrated: bool,
    pub is_excited: bool,
    pub is_uncertain: bool,
}

impl MoodResult {
    /// The mood shown when several are present.
    #[must_use]
    pub fn dominant(&self) -> Option<Mood> {
        [
            (self.is_excited, Mood::Excited),
            (self.is_confused, Mood::Confused),
            (self.is_frustrated, Mood::Frustrated),
            (self.is_uncertain, Mood::Uncertain),
        ]
        .into_iter()
        .find_map(|(set, mood)| set.then_some(mood))
    }

    /// Whether no mood was detected.
    #[must_use]
    pub fn is_calm(&self) -> bool {
        self.dominant().is_none()
    }
}

/// Classify the raw text of a user-authored message.
///
/// Matching is case-insensitive and runs over the unparsed text, markup
/// included. Callers skip this for AI responses.
#[must_use]
pub fn classify(text: &str) -> MoodResult {
    MoodResult {
        is_confused: CONFUSED.is_match(text),
        is_frustrated: FRUSTRATED.is_match(text),
        is_excited: EXCITED.is_match(text),
        is_uncertain: UNCERTAIN.is_match(text),
    }
}
