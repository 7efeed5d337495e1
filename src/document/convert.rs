//! Markdown-to-HTML conversion with comrak.

use super::RenderError;

/// Whether a conversion produces block markup or a single inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertMode {
    #[default]
    Block,
    /// Same as `Block`, minus the paragraph wrapper around a lone paragraph.
    Inline,
}

/// Turns a markdown string into an HTML fragment.
///
/// Implementations must not execute anything embedded in the input. The
/// output is not trusted; it is sanitized before display.
pub trait MarkdownConverter {
    /// Convert `markdown` to HTML.
    ///
    /// # Errors
    /// Returns [`RenderError::Conversion`] when the input cannot be converted.
    fn convert(&self, markdown: &str, mode: ConvertMode) -> Result<String, RenderError>;
}

/// GitHub-flavored conversion via comrak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComrakConverter {
    /// Render a single line break as `<br />` instead of joining lines.
    pub soft_breaks: bool,
    /// Pass raw HTML such as `<u>` through to the sanitizer.
    pub raw_html: bool,
}

impl Default for ComrakConverter {
    fn default() -> Self {
        Self {
            soft_breaks: true,
            raw_html: true,
        }
    }
}

impl MarkdownConverter for ComrakConverter {
    fn convert(&self, markdown: &str, mode: ConvertMode) -> Result<String, RenderError> {
        let mut options = comrak::Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.shortcodes = true;
        options.render.hardbreaks = self.soft_breaks;
        options.render.unsafe_ = self.raw_html;

        let html = comrak::markdown_to_html(markdown, &options);
        Ok(match mode {
            ConvertMode::Block => html,
            ConvertMode::Inline => strip_lone_paragraph(&html).to_string(),
        })
    }
}

fn strip_lone_paragraph(html: &str) -> &str {
    let trimmed = html.trim_end_matches('\n');
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner,
        _ => html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(md: &str) -> String {
        ComrakConverter::default()
            .convert(md, ConvertMode::Block)
            .unwrap()
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(convert("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn test_soft_break_becomes_line_break() {
        let html = convert("one\ntwo");
        assert!(html.contains("one<br />\ntwo"), "got: {html}");
    }

    #[test]
    fn test_soft_breaks_can_be_disabled() {
        let converter = ComrakConverter {
            soft_breaks: false,
            ..ComrakConverter::default()
        };
        let html = converter.convert("one\ntwo", ConvertMode::Block).unwrap();
        assert!(!html.contains("<br"), "got: {html}");
    }

    #[test]
    fn test_strikethrough_extension() {
        assert!(convert("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_underline_passes_through() {
        assert!(convert("<u>under</u>").contains("<u>under</u>"));
    }

    #[test]
    fn test_inline_mode_strips_paragraph() {
        let html = ComrakConverter::default()
            .convert("**bold**", ConvertMode::Inline)
            .unwrap();
        assert_eq!(html, "<strong>bold</strong>");
    }

    #[test]
    fn test_inline_mode_keeps_multiple_paragraphs() {
        let html = ComrakConverter::default()
            .convert("a\n\nb", ConvertMode::Inline)
            .unwrap();
        assert_eq!(html, "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(convert(""), "");
    }
}
