//! `chatmark mood` command implementation.

use std::path::PathBuf;

use chatmark_mood::{MoodIndicator, MoodResult, classify};
use clap::Args;
use serde::Serialize;

use super::read_message;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the mood command.
#[derive(Args)]
pub(crate) struct MoodArgs {
    /// Message file (default: stdin).
    input: Option<PathBuf>,

    /// Sentiment score used when no mood is detected.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    score: f64,
}

#[derive(Serialize)]
struct MoodReport {
    mood: MoodResult,
    indicator: MoodIndicator,
}

impl MoodArgs {
    /// Execute the mood command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let text = read_message(self.input.as_deref())?;
        let report = report(&text, self.score);
        output.result(&serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

fn report(text: &str, score: f64) -> MoodReport {
    let mood = classify(text);
    MoodReport {
        indicator: MoodIndicator::select(&mood, score),
        mood,
    }
}
