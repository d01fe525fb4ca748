use async_trait::async_trait;
use serde::Serialize;

use crate::prompt::build_prompt;
use crate::{Error, Language, Transcript, extract_video_id, thumbnail_url};

/// Source of caption transcripts
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_id: &str, language: Language) -> Result<Transcript, Error>;
}

/// Source of generated summaries
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, prompt: &str, transcript_text: &str) -> Result<String, Error>;
}

/// Stage transition hooks, implemented by the presentation layer for status
/// messages. All methods default to no-ops.
pub trait Progress {
    fn video_identified(&self, _video_id: &str) {}
    fn transcript_started(&self, _language: Language) {}
    fn transcript_ready(&self, _transcript: &Transcript) {}
    fn summary_started(&self) {}
}

/// Progress implementation that reports nothing
pub struct NoProgress;

impl Progress for NoProgress {}

/// Everything the presentation layer renders for one completed run
#[derive(Debug, Clone, Serialize)]
pub struct Notes {
    pub video_id: String,
    pub title: String,
    pub language: Language,
    pub thumbnail_url: String,
    pub summary: String,
}

/// Run the full pipeline for one URL: identify the video, fetch its caption
/// transcript, build the instruction prompt, generate the summary.
///
/// The first failing stage returns its error and no later stage executes; in
/// particular a missing transcript means the generation provider is never
/// called.
pub async fn run<T, S, P>(
    transcripts: &T,
    summaries: &S,
    progress: &P,
    url: &str,
    language: Language,
) -> Result<Notes, Error>
where
    T: TranscriptProvider + ?Sized,
    S: SummaryProvider + ?Sized,
    P: Progress + ?Sized,
{
    let video_id = extract_video_id(url)?;
    progress.video_identified(&video_id);

    progress.transcript_started(language);
    let transcript = transcripts.fetch(&video_id, language).await?;
    progress.transcript_ready(&transcript);

    progress.summary_started();
    let prompt = build_prompt(language);
    let summary = summaries.summarize(&prompt, &transcript.joined_text()).await?;

    Ok(Notes {
        thumbnail_url: thumbnail_url(&video_id),
        video_id,
        title: transcript.title,
        language,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::Segment;

    struct StubTranscripts {
        segments: Vec<&'static str>,
        fetches: AtomicUsize,
    }

    impl StubTranscripts {
        fn new(segments: Vec<&'static str>) -> Self {
            Self { segments, fetches: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl TranscriptProvider for StubTranscripts {
        async fn fetch(&self, video_id: &str, language: Language) -> Result<Transcript, Error> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Transcript {
                video_id: video_id.to_string(),
                title: "Stub Video".to_string(),
                language,
                segments: self
                    .segments
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Segment {
                        text: text.to_string(),
                        start: i as f64,
                        duration: 1.0,
                    })
                    .collect(),
            })
        }
    }

    struct UnavailableTranscripts;

    #[async_trait]
    impl TranscriptProvider for UnavailableTranscripts {
        async fn fetch(&self, video_id: &str, language: Language) -> Result<Transcript, Error> {
            Err(Error::TranscriptUnavailable {
                video_id: video_id.to_string(),
                language,
                reason: "no caption track".to_string(),
            })
        }
    }

    struct RecordingSummaries {
        calls: Mutex<Vec<(String, String)>>,
        response: &'static str,
    }

    impl RecordingSummaries {
        fn new(response: &'static str) -> Self {
            Self { calls: Mutex::new(Vec::new()), response }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SummaryProvider for RecordingSummaries {
        async fn summarize(&self, prompt: &str, transcript_text: &str) -> Result<String, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), transcript_text.to_string()));
            Ok(self.response.to_string())
        }
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let transcripts = StubTranscripts::new(vec!["Hello", "world"]);
        let summaries = RecordingSummaries::new("generated text");

        let notes = run(
            &transcripts,
            &summaries,
            &NoProgress,
            "https://youtube.com/watch?v=ABC123",
            Language::En,
        )
        .await
        .unwrap();

        assert_eq!(notes.video_id, "ABC123");
        assert_eq!(notes.summary, "generated text");
        assert_eq!(notes.thumbnail_url, "http://img.youtube.com/vi/ABC123/0.jpg");

        let calls = summaries.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, build_prompt(Language::En));
        assert_eq!(calls[0].1, "Hello world");
    }

    #[tokio::test]
    async fn test_transcript_failure_skips_generation() {
        let summaries = RecordingSummaries::new("should never appear");

        let err = run(
            &UnavailableTranscripts,
            &summaries,
            &NoProgress,
            "https://youtube.com/watch?v=ABC123",
            Language::Fr,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::TranscriptUnavailable { .. }));
        assert_eq!(summaries.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_url_skips_all_network_stages() {
        let transcripts = StubTranscripts::new(vec!["unused"]);
        let summaries = RecordingSummaries::new("unused");

        let err = run(
            &transcripts,
            &summaries,
            &NoProgress,
            "https://youtube.com/watch",
            Language::En,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::MalformedInput { .. }));
        assert_eq!(transcripts.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(summaries.call_count(), 0);
    }
}
