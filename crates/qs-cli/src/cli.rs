use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `qsv` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qsv",
    version,
    about = "quiz-saver - save answered quiz questions to a document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Watch a page change feed and offer to save each answered question.
    Watch(WatchArgs),
    /// Save one question and answer directly.
    Save(SaveArgs),
    /// Print the target document, creating it on first use.
    Target,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// JSON Lines change feed; `-` reads stdin
    #[arg(long, default_value = "-")]
    pub feed: String,

    /// Accept every save prompt without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl WatchArgs {
    /// Feed file path, or `None` for stdin.
    #[must_use]
    pub fn feed_path(&self) -> Option<PathBuf> {
        (self.feed != "-").then(|| PathBuf::from(&self.feed))
    }
}

#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    #[arg(long)]
    pub question: String,

    #[arg(long)]
    pub answer: String,

    #[arg(long)]
    pub explanation: Option<String>,
}
