//! Preview page chrome.
//!
//! This module wraps rendered notes for display:
//! - [`page`]: Standalone HTML document with sidebar and status line
//! - [`style`]: Light, dark and auto stylesheets
//! - [`status`]: Word and character counts

pub mod page;
pub mod status;
pub mod style;

pub use page::PreviewPage;
pub use status::NoteStats;
