//! Segment, render, sanitize.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use super::convert::{ComrakConverter, MarkdownConverter};
use super::render::render;
use super::sanitize::{AmmoniaSanitizer, Sanitizer};
use super::segment::segment;
use super::RenderError;

thread_local! {
    /// Set while this thread is inside a contained render.
    static CONTAINED: Cell<bool> = const { Cell::new(false) };
}

/// Shown in place of the preview when rendering fails.
pub const FALLBACK_HTML: &str = r#"<p class="render-error">Error parsing markdown</p>"#;

/// The full note-to-preview pipeline.
///
/// Stateless: every call starts from the raw text, so the same input always
/// produces the same output.
pub struct Pipeline<C = ComrakConverter, S = AmmoniaSanitizer> {
    converter: C,
    sanitizer: S,
}

impl Pipeline {
    /// Comrak conversion with soft breaks, ammonia sanitization.
    pub fn new() -> Self {
        Self::with_parts(ComrakConverter::default(), AmmoniaSanitizer)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MarkdownConverter, S: Sanitizer> Pipeline<C, S> {
    pub const fn with_parts(converter: C, sanitizer: S) -> Self {
        Self {
            converter,
            sanitizer,
        }
    }

    /// Render `text` to sanitized preview HTML.
    ///
    /// Never fails: a conversion error or a panic inside the converter is
    /// logged and replaced by [`FALLBACK_HTML`].
    pub fn to_html(&self, text: &str) -> String {
        match self.try_render(text) {
            Ok(html) => self.sanitizer.sanitize(&html),
            Err(err) => {
                tracing::error!(error = %err, "preview render failed");
                FALLBACK_HTML.to_string()
            }
        }
    }

    /// Segment and render `text` without sanitizing or containing failures.
    ///
    /// # Errors
    /// Returns the converter's error, or [`RenderError::Panicked`] if it panicked.
    pub fn try_render(&self, text: &str) -> Result<String, RenderError> {
        install_quiet_hook();
        let outer = CONTAINED.replace(true);
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            let blocks = segment(text);
            tracing::debug!(blocks = blocks.len(), "rendering note");
            render(&blocks, &self.converter)
        }));
        CONTAINED.set(outer);
        attempt.unwrap_or_else(|payload| Err(RenderError::Panicked(panic_message(&*payload))))
    }
}

impl<C, S> std::fmt::Debug for Pipeline<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

/// Wrap the panic hook so panics caught by [`Pipeline::try_render`] are not
/// also printed to stderr. Panics anywhere else still reach the previous hook.
fn install_quiet_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CONTAINED.get() {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::ConvertMode;

    struct Panicking;

    impl MarkdownConverter for Panicking {
        fn convert(&self, _markdown: &str, _mode: ConvertMode) -> Result<String, RenderError> {
            panic!("converter exploded");
        }
    }

    struct Failing;

    impl MarkdownConverter for Failing {
        fn convert(&self, _markdown: &str, _mode: ConvertMode) -> Result<String, RenderError> {
            Err(RenderError::Conversion("bad input".to_string()))
        }
    }

    /// Leaves HTML untouched so tests can see raw renderer output.
    struct Passthrough;

    impl Sanitizer for Passthrough {
        fn sanitize(&self, html: &str) -> String {
            html.to_string()
        }
    }

    #[test]
    fn test_to_html_renders_highlight() {
        let html = Pipeline::new().to_html("!r hello");
        assert_eq!(html, "<span class=\"md-highlight-green\"><p>hello</p>\n</span>");
    }

    #[test]
    fn test_to_html_is_deterministic() {
        let pipeline = Pipeline::new();
        let text = "# Title\n\n!pm We propose\n\n!a point\n- one\n- two";
        assert_eq!(pipeline.to_html(text), pipeline.to_html(text));
    }

    #[test]
    fn test_script_in_normal_block_is_stripped() {
        let html = Pipeline::new().to_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script"), "got: {html}");
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_script_in_highlight_block_is_stripped() {
        let html = Pipeline::new().to_html("!wb <img src=x onerror=alert(1)>");
        assert!(!html.contains("onerror"), "got: {html}");
        assert!(html.contains("md-highlight-blue"));
    }

    #[test]
    fn test_conversion_failure_yields_fallback() {
        let pipeline = Pipeline::with_parts(Failing, AmmoniaSanitizer);
        assert_eq!(pipeline.to_html("anything"), FALLBACK_HTML);
    }

    #[test]
    fn test_converter_panic_yields_fallback() {
        let pipeline = Pipeline::with_parts(Panicking, AmmoniaSanitizer);
        assert_eq!(pipeline.to_html("anything"), FALLBACK_HTML);
    }

    #[test]
    fn test_contained_panic_leaves_hook_armed() {
        let pipeline = Pipeline::with_parts(Panicking, AmmoniaSanitizer);
        assert!(!CONTAINED.get());
        assert_eq!(pipeline.to_html("one"), FALLBACK_HTML);
        assert!(!CONTAINED.get());
        assert_eq!(pipeline.to_html("two"), FALLBACK_HTML);
        assert!(!CONTAINED.get());
    }

    #[test]
    fn test_nested_render_restores_outer_state() {
        /// Renders a nested note through another pipeline, then checks the flag.
        struct Nested;

        impl MarkdownConverter for Nested {
            fn convert(&self, markdown: &str, _mode: ConvertMode) -> Result<String, RenderError> {
                let inner = Pipeline::with_parts(Panicking, Passthrough).to_html(markdown);
                assert!(CONTAINED.get(), "outer render lost its containment");
                Ok(inner)
            }
        }

        let pipeline = Pipeline::with_parts(Nested, Passthrough);
        assert_eq!(pipeline.to_html("x"), FALLBACK_HTML);
        assert!(!CONTAINED.get());
    }

    #[test]
    fn test_try_render_reports_panic_message() {
        let pipeline = Pipeline::with_parts(Panicking, Passthrough);
        match pipeline.try_render("x") {
            Err(RenderError::Panicked(msg)) => assert_eq!(msg, "converter exploded"),
            other => panic!("expected panic error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_note_renders_line_break() {
        let pipeline = Pipeline::with_parts(ComrakConverter::default(), Passthrough);
        assert_eq!(pipeline.to_html(""), "<br/>");
    }
}
