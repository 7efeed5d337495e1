//! Stripping executable content from preview HTML.

use std::sync::LazyLock;

/// Removes scripts, event handlers and unsafe URLs from an HTML fragment while
/// keeping structural and styling markup.
pub trait Sanitizer {
    fn sanitize(&self, html: &str) -> String;
}

static CLASS_PRESERVING: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::default();
    builder.add_generic_attributes(&["class"]);
    builder
});

/// Allow-list sanitizer backed by ammonia, keeping `class` on every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmoniaSanitizer;

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        CLASS_PRESERVING.clean(html).to_string()
    }
}
