use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::info;

mod cli;

use cli::{Cli, OutputFormat};
use ytnotes::pipeline::{self, Progress};
use ytnotes::summarize::{DEFAULT_MODEL, GeminiClient};
use ytnotes::youtube::CaptionClient;
use ytnotes::{Language, Transcript, thumbnail_url};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytnotes.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytnotes")
        .join("logs")
}

/// Status messages for each pipeline stage, written to stderr so stdout
/// stays clean for the rendered notes
struct ConsoleProgress {
    verbose: bool,
}

impl Progress for ConsoleProgress {
    fn video_identified(&self, video_id: &str) {
        eprintln!("Thumbnail: {}", thumbnail_url(video_id));
    }

    fn transcript_started(&self, language: Language) {
        eprintln!("Extracting transcript in {language}...");
    }

    fn transcript_ready(&self, transcript: &Transcript) {
        eprintln!("Transcript extracted successfully!");
        if self.verbose {
            eprintln!(
                "Video: {} ({})\nLanguage: {}\nSegments: {}",
                transcript.title,
                transcript.video_id,
                transcript.language,
                transcript.segments.len(),
            );
        }
    }

    fn summary_started(&self) {
        eprintln!("Generating summary...");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = <Cli as clap::Parser>::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytnotes::config::Config::load().unwrap_or_default();

    // Apply config defaults (CLI flags take priority)
    let lang = cli
        .lang
        .or_else(|| config.default_lang.as_deref().and_then(Language::parse))
        .unwrap_or(Language::En);
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Text);
    let model = cli
        .model
        .clone()
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // The one credential this tool holds, read once at startup
    let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
        eyre::eyre!("GOOGLE_API_KEY environment variable not set (required for Gemini summarization)")
    })?;

    // Collect the URL: from arg or a single stdin line
    let url = match cli.url {
        Some(ref url) => url.clone(),
        None => {
            let stdin = io::stdin();
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            line
        }
    };
    let url = url.trim().to_string();

    if url.is_empty() {
        bail!("no URL provided\n\nUsage: ytnotes <URL>\n       echo <URL> | ytnotes");
    }

    let client = reqwest::Client::new();
    let captions = CaptionClient::new(client.clone());
    let gemini = GeminiClient::new(client, api_key, model);
    let progress = ConsoleProgress { verbose: cli.verbose };

    let notes = pipeline::run(&captions, &gemini, &progress, &url, lang).await?;

    let rendered = match format {
        OutputFormat::Text => ytnotes::output::render_text(&notes),
        OutputFormat::Json => ytnotes::output::render_json(&notes)?,
    };

    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)?;
        if cli.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }

    Ok(())
}
