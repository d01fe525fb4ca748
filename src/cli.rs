use clap::Parser;
use std::path::PathBuf;

use ytnotes::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name, e.g. from the config file
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ytnotes",
    about = "YouTube transcript summarizer",
    version,
)]
pub struct Cli {
    /// YouTube watch URL (reads one line from stdin if omitted)
    pub url: Option<String>,

    /// Caption language to request (no fallback if unavailable)
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Gemini model for summary generation
    #[arg(long)]
    pub model: Option<String>,

    /// Write the notes to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show extraction metadata
    #[arg(short, long)]
    pub verbose: bool,
}
