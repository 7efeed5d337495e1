use thiserror::Error;

/// Failure while turning a note into preview HTML.
///
/// These never reach the caller of [`Pipeline::to_html`](super::Pipeline::to_html);
/// they are logged and replaced by a fallback fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markdown conversion failed: {0}")]
    Conversion(String),
    #[error("renderer panicked: {0}")]
    Panicked(String),
}
