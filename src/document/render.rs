//! Turning blocks into HTML fragments.

use super::convert::{ConvertMode, MarkdownConverter};
use super::segment::Block;
use super::tokens::{self, FALLBACK_HIGHLIGHT_CLASS, Treatment};
use super::RenderError;

/// Markup emitted for an [`Block::Empty`] block.
pub const EMPTY_BLOCK_HTML: &str = "<br/>";

/// Render every block and concatenate the fragments, in order.
///
/// Each block's content is converted on its own, so markdown state such as
/// an open list never carries across a block boundary.
///
/// # Errors
/// Propagates the first conversion failure.
pub fn render(blocks: &[Block], converter: &dyn MarkdownConverter) -> Result<String, RenderError> {
    let mut html = String::new();
    for block in blocks {
        html.push_str(&render_block(block, converter)?);
    }
    Ok(html)
}

/// Render a single block to its fragment.
///
/// # Errors
/// Returns the converter's error if the block content cannot be converted.
pub fn render_block(
    block: &Block,
    converter: &dyn MarkdownConverter,
) -> Result<String, RenderError> {
    let Some(content) = block.content() else {
        return Ok(EMPTY_BLOCK_HTML.to_string());
    };
    let body = converter.convert(content, ConvertMode::Block)?;
    match block {
        Block::Highlight { token, .. } => {
            let class = match tokens::lookup(token) {
                Some(Treatment::Highlight { class }) => class,
                _ => FALLBACK_HIGHLIGHT_CLASS,
            };
            Ok(format!(r#"<span class="{class}">{body}</span>"#))
        }
        Block::DebateRole { token, .. } => match tokens::lookup(token) {
            Some(Treatment::DebateRole { title, class }) => Ok(format!(
                r#"<div class="{class}"><div class="debate-header">{title}</div><div class="debate-content">{body}</div></div>"#
            )),
            _ => {
                tracing::debug!(token, "debate block with unknown token, rendering plain");
                Ok(body)
            }
        },
        Block::Empty | Block::Normal(_) => Ok(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::ComrakConverter;
    use crate::document::segment::segment;

    /// Echoes its input so tests can see exactly what was converted.
    struct Echo;

    impl MarkdownConverter for Echo {
        fn convert(&self, markdown: &str, _mode: ConvertMode) -> Result<String, RenderError> {
            Ok(format!("[{markdown}]"))
        }
    }

    struct Failing;

    impl MarkdownConverter for Failing {
        fn convert(&self, _markdown: &str, _mode: ConvertMode) -> Result<String, RenderError> {
            Err(RenderError::Conversion("boom".to_string()))
        }
    }

    #[test]
    fn test_empty_block_is_line_break() {
        assert_eq!(render(&[Block::Empty], &Echo).unwrap(), "<br/>");
    }

    #[test]
    fn test_rebuttal_is_green_container() {
        let html = render(&segment("!r hello"), &Echo).unwrap();
        assert_eq!(html, r#"<span class="md-highlight-green">[hello]</span>"#);
    }

    #[test]
    fn test_prime_minister_block_has_header_and_body() {
        let html = render(&segment("!pm I propose..."), &Echo).unwrap();
        assert_eq!(
            html,
            r#"<div class="debate-pm"><div class="debate-header">Prime Minister</div><div class="debate-content">[I propose...]</div></div>"#
        );
    }

    #[test]
    fn test_normal_block_is_converted_unwrapped() {
        assert_eq!(render(&segment("plain"), &Echo).unwrap(), "[plain]");
    }

    #[test]
    fn test_fragments_are_concatenated_without_separators() {
        let html = render(&segment("a\n\n!wb b\n\n\nc"), &Echo).unwrap();
        assert_eq!(html, r#"[a]<span class="md-highlight-blue">[b]</span>[c]"#);
    }

    #[test]
    fn test_unknown_highlight_token_falls_back_to_first_class() {
        let block = Block::Highlight {
            token: "!zz".to_string(),
            content: "x".to_string(),
        };
        assert_eq!(
            render_block(&block, &Echo).unwrap(),
            r#"<span class="md-highlight-red">[x]</span>"#
        );
    }

    #[test]
    fn test_unknown_debate_token_renders_plain() {
        let block = Block::DebateRole {
            token: "!zz".to_string(),
            content: "x".to_string(),
        };
        assert_eq!(render_block(&block, &Echo).unwrap(), "[x]");
    }

    #[test]
    fn test_highlight_token_in_debate_block_renders_plain() {
        let block = Block::DebateRole {
            token: "!r".to_string(),
            content: "x".to_string(),
        };
        assert_eq!(render_block(&block, &Echo).unwrap(), "[x]");
    }

    #[test]
    fn test_conversion_error_propagates() {
        assert!(matches!(
            render(&segment("text"), &Failing),
            Err(RenderError::Conversion(_))
        ));
    }

    #[test]
    fn test_empty_block_does_not_call_converter() {
        assert_eq!(render(&segment("   "), &Failing).unwrap(), "<br/>");
    }

    #[test]
    fn test_list_does_not_continue_across_highlight() {
        let html = render(&segment("- one\n\n!a two\n\n- three"), &ComrakConverter::default())
            .unwrap();
        assert_eq!(html.matches("<ul>").count(), 2, "got: {html}");
    }

    #[test]
    fn test_highlight_content_soft_breaks() {
        let html = render(&segment("!info first\nsecond"), &ComrakConverter::default()).unwrap();
        assert_eq!(
            html,
            "<span class=\"md-highlight-yellow\"><p>first<br />\nsecond</p>\n</span>"
        );
    }
}
