use std::fmt::Write;

use crate::config::ThemeMode;

use super::status::{NoteStats, render_status_line};
use super::style::stylesheet;

/// A standalone HTML page around a rendered note.
#[derive(Debug, Clone)]
pub struct PreviewPage<'a> {
    /// Note name, shown as the page title.
    pub title: &'a str,
    /// Sanitized preview markup.
    pub body_html: &'a str,
    pub theme: ThemeMode,
    /// Note names for the sidebar; `None` hides it.
    pub sidebar: Option<&'a [String]>,
    /// `None` hides the status line.
    pub stats: Option<NoteStats>,
}

impl PreviewPage<'_> {
    pub fn to_html(&self) -> String {
        let title = ammonia::clean_text(self.title);
        let mut page = String::new();
        let _ = write!(
            page,
            "<!DOCTYPE html>\n<html data-theme=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{}</style>\n</head>\n<body>\n",
            self.theme.as_str(),
            stylesheet(self.theme)
        );
        if let Some(notes) = self.sidebar {
            page.push_str(&render_sidebar(notes, self.title));
        }
        let _ = write!(
            page,
            "<div class=\"main\">\n<main class=\"markdown-preview\">\n{}\n</main>\n",
            self.body_html
        );
        if let Some(stats) = self.stats {
            page.push_str(&render_status_line(stats));
            page.push('\n');
        }
        page.push_str("</div>\n</body>\n</html>\n");
        page
    }
}

fn render_sidebar(notes: &[String], active: &str) -> String {
    let mut html = String::from("<nav class=\"sidebar\">\n<ul>\n");
    for note in notes {
        let class = if note == active {
            "note-item active"
        } else {
            "note-item"
        };
        let _ = writeln!(
            html,
            "<li class=\"{class}\">{}</li>",
            ammonia::clean_text(note)
        );
    }
    html.push_str("</ul>\n</nav>\n");
    html
}
