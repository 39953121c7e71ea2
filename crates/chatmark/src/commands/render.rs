//! `chatmark render` command implementation.

use std::path::PathBuf;

use chatmark_config::{CliSettings, Config, Theme};
use chatmark_message::MessageRenderer;
use chatmark_mood::Sentiment;
use clap::Args;

use super::read_message;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Message file (default: stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover chatmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme: dark, light, terminal or custom (overrides config).
    #[arg(long)]
    theme: Option<String>,

    /// Use compact spacing (overrides config).
    #[arg(long)]
    compact: bool,

    /// Do not produce a mood/sentiment indicator.
    #[arg(long)]
    no_sentiment: bool,

    /// Disable the markup cache.
    #[arg(long)]
    no_cache: bool,

    /// Sentiment as JSON: {"score": 0.4, "label": "positive", "isAiResponse": false}.
    #[arg(long, conflicts_with = "score")]
    sentiment: Option<String>,

    /// Sentiment score of the message (label derived from the score).
    #[arg(long, allow_hyphen_values = true)]
    score: Option<f64>,

    /// Treat the message as an AI response (skips mood detection).
    #[arg(long, requires = "score")]
    ai: bool,

    /// Print JSON with html, mood and indicator instead of bare HTML.
    #[arg(long)]
    json: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read or
    /// the sentiment JSON is malformed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let sentiment = self.parse_sentiment()?;
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Using configuration file");
        }

        let text = read_message(self.input.as_deref())?;
        if text.trim().is_empty() {
            output.warning("Input is empty");
        }

        let renderer = MessageRenderer::from_config(&config);
        let rendered = renderer.render(&text, sentiment.as_ref());

        if self.json {
            output.result(&serde_json::to_string_pretty(&rendered)?);
        } else {
            output.result(&rendered.html);
        }
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            show_sentiment: self.no_sentiment.then_some(false),
            theme: self.theme.clone().map(Theme::from),
            compact: self.compact.then_some(true),
            cache_enabled: self.no_cache.then_some(false),
        }
    }

    fn parse_sentiment(&self) -> Result<Option<Sentiment>, CliError> {
        if let Some(json) = &self.sentiment {
            return Ok(Some(serde_json::from_str(json)?));
        }
        Ok(self.score.map(|score| {
            if self.ai {
                Sentiment::ai(score)
            } else {
                Sentiment::user(score)
            }
        }))
    }
}
