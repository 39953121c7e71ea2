//! chatmark CLI - preview chat markup rendering.
//!
//! Provides commands for:
//! - `render`: Render a message to HTML (or JSON with mood and indicator)
//! - `mood`: Classify the mood of a message

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MoodArgs, RenderArgs};
use output::Output;

/// chatmark - chat markup renderer.
#[derive(Parser)]
#[command(name = "chatmark", version, about)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a message read from a file or stdin.
    Render(RenderArgs),
    /// Print the moods detected in a message.
    Mood(MoodArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Mood(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["chatmark", "mood", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Mood(_)));
    }
}
