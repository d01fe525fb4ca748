use crate::Language;

/// Build the fixed summarization instruction for a caption language.
///
/// The transcript text is appended after this prompt by the generator, so the
/// template ends mid-sentence.
pub fn build_prompt(language: Language) -> String {
    format!(
        "You are a YouTube video summarizer. You will be taking the transcript text in {language} \
and summarizing the entire video, providing the important points in a concise manner \
(within 500 words). Please provide the summary of the text given here: "
    )
}
