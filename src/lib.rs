pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod summarize;
pub mod youtube;

use serde::Serialize;

pub use error::Error;

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Caption language requested from YouTube and named in the summary prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Zh,
    Ru,
    Ar,
    Hi,
    Ta,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Zh => "zh",
            Language::Ru => "ru",
            Language::Ar => "ar",
            Language::Hi => "hi",
            Language::Ta => "ta",
        }
    }

    /// Parse a two-letter code, e.g. from the config file
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            "zh" => Some(Language::Zh),
            "ru" => Some(Language::Ru),
            "ar" => Some(Language::Ar),
            "hi" => Some(Language::Hi),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Complete caption transcript for a video
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: Language,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Segments space-joined in the order the provider returned them
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the video ID from a watch URL: the value of its `v=` query parameter
pub fn extract_video_id(url: &str) -> Result<String, Error> {
    let url = url.trim();

    if let Some(caps) = regex::Regex::new(r"[?&]v=([^&#]+)")
        .unwrap()
        .captures(url)
    {
        return Ok(caps[1].to_string());
    }

    Err(Error::MalformedInput { url: url.to_string() })
}

/// Thumbnail image reference for a video ID
pub fn thumbnail_url(video_id: &str) -> String {
    format!("http://img.youtube.com/vi/{video_id}/0.jpg")
}
