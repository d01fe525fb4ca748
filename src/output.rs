use crate::pipeline::Notes;

/// Render notes as plain text: title, then the summary block
pub fn render_text(notes: &Notes) -> String {
    let mut out = String::new();
    if !notes.title.is_empty() {
        out.push_str(&notes.title);
        out.push_str("\n\n");
    }
    out.push_str("Detailed Notes:\n\n");
    out.push_str(notes.summary.trim_end());
    out.push('\n');
    out
}

/// Render notes as pretty-printed JSON, metadata included
pub fn render_json(notes: &Notes) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}
