use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;

use crate::Error;
use crate::pipeline::SummaryProvider;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Generates summaries through the Gemini `generateContent` API.
///
/// The API key is injected at construction; it is the only credential the
/// pipeline holds and is never mutated afterwards.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String) -> Self {
        Self { http, api_key, model }
    }

    async fn generate_inner(&self, request_text: &str) -> Result<String> {
        debug!("Summarizing via Gemini API with model {}", self.model);

        let url = format!(
            "{GEMINI_ENDPOINT}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {"text": request_text}
                    ]
                }
            ]
        });

        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_gemini_text(&json)
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    /// Prompt first, transcript second, one request part. All-or-nothing:
    /// the text comes back complete or the call fails.
    async fn summarize(&self, prompt: &str, transcript_text: &str) -> Result<String, Error> {
        let request_text = format!("{prompt}{transcript_text}");
        self.generate_inner(&request_text)
            .await
            .map_err(|source| Error::GenerationFailed { reason: source.to_string() })
    }
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}
