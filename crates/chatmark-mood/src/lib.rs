//! Mood and sentiment accents for chat messages.
//!
//! [`classify`] scans user-authored text for four independent moods. The
//! display layer shows a single glyph for a message, chosen by
//! [`MoodIndicator::select`]: the strongest detected mood wins, otherwise the
//! numeric sentiment score decides.
//!
//! ```
//! use chatmark_mood::{MoodIndicator, classify};
//!
//! let mood = classify("I'm really confused, can you explain?");
//! assert!(mood.is_confused);
//!
//! let indicator = MoodIndicator::select(&mood, -0.4);
//! assert_eq!(indicator.color_class, "mood-confused");
//! ```

mod classify;
mod indicator;
mod sentiment;

pub use classify::{Mood, MoodResult, classify};
pub use indicator::MoodIndicator;
pub use sentiment::{Sentiment, SentimentLabel};
