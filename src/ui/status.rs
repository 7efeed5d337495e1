use serde::Serialize;

/// Word and character counts shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoteStats {
    pub words: usize,
    pub chars: usize,
}

impl NoteStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

impl std::fmt::Display for NoteStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} words | {} chars", self.words, self.chars)
    }
}

/// Status line markup for the preview page.
pub fn render_status_line(stats: NoteStats) -> String {
    format!(
        r#"<footer class="status-line"><span class="status-item">{} words</span><span class="status-separator">|</span><span class="status-item">{} chars</span></footer>"#,
        stats.words, stats.chars
    )
}
