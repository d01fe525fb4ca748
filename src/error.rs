use crate::Language;

/// One variant per pipeline stage that can fail. Whichever occurs first
/// short-circuits the remaining stages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL carries no `v=` query parameter to extract an ID from
    #[error("could not extract a video ID from {url:?}\n\nSupported format:\n  https://www.youtube.com/watch?v=ID")]
    MalformedInput { url: String },

    /// YouTube has no caption transcript for this video/language pair
    #[error("no {language} captions available for video {video_id}: {reason}")]
    TranscriptUnavailable {
        video_id: String,
        language: Language,
        reason: String,
    },

    /// The generation provider failed to return a summary
    #[error("summary generation failed: {reason}")]
    GenerationFailed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_unavailable_names_language() {
        let err = Error::TranscriptUnavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
            language: Language::Fr,
            reason: "no caption track".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fr"));
        assert!(msg.contains("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_malformed_input_names_supported_form() {
        let err = Error::MalformedInput { url: "https://youtube.com/watch".to_string() };
        assert!(err.to_string().contains("watch?v=ID"));
    }
}
