//! Stylesheet for the preview page.
//!
//! Highlight and debate-role rules are generated from the token table so a
//! new token gets styled without touching this file.

use std::fmt::Write;

use crate::config::ThemeMode;
use crate::document::Treatment;
use crate::document::tokens;

/// Colors for one scheme.
struct Palette {
    page_bg: &'static str,
    page_fg: &'static str,
    muted: &'static str,
    sidebar_bg: &'static str,
    government: &'static str,
    opposition: &'static str,
}

const LIGHT: Palette = Palette {
    page_bg: "#ffffff",
    page_fg: "#1f2328",
    muted: "#656d76",
    sidebar_bg: "#f6f8fa",
    government: "#1a7f37",
    opposition: "#cf222e",
};

const DARK: Palette = Palette {
    page_bg: "#0d1117",
    page_fg: "#e6edf3",
    muted: "#8d96a0",
    sidebar_bg: "#161b22",
    government: "#3fb950",
    opposition: "#f85149",
};

fn highlight_color(class: &str, dark: bool) -> &'static str {
    match (class, dark) {
        ("md-highlight-green", false) => "#d3f5d3",
        ("md-highlight-green", true) => "#1f4a2a",
        ("md-highlight-blue", false) => "#d6e8ff",
        ("md-highlight-blue", true) => "#1d3557",
        ("md-highlight-yellow", false) => "#fff3b0",
        ("md-highlight-yellow", true) => "#4d4214",
        (_, false) => "#ffd6d6",
        (_, true) => "#5a1e1e",
    }
}

fn is_government(title: &str) -> bool {
    title.contains("Government") || title.contains("Prime Minister")
}

fn scheme_rules(palette: &Palette, dark: bool) -> String {
    let mut css = String::new();
    let _ = writeln!(
        css,
        "body{{background:{};color:{};}}\n.sidebar{{background:{};}}\n.status-line{{color:{};}}",
        palette.page_bg, palette.page_fg, palette.sidebar_bg, palette.muted
    );
    for (_, treatment) in tokens::all() {
        match treatment {
            Treatment::Highlight { class } => {
                let _ = writeln!(
                    css,
                    ".{class}{{display:block;background:{};border-radius:4px;padding:0.1em 0.4em;}}",
                    highlight_color(class, dark)
                );
            }
            Treatment::DebateRole { title, class } => {
                let accent = if is_government(title) {
                    palette.government
                } else {
                    palette.opposition
                };
                let _ = writeln!(
                    css,
                    ".{class}{{border-left:4px solid {accent};margin:1em 0;padding:0.25em 0.75em;}}\n.{class} .debate-header{{color:{accent};}}"
                );
            }
        }
    }
    css
}

const LAYOUT: &str = "body{margin:0;font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",sans-serif;line-height:1.6;display:flex;min-height:100vh;}\n\
.sidebar{width:220px;padding:1em;flex-shrink:0;}\n\
.sidebar ul{list-style:none;padding:0;margin:0;}\n\
.note-item{padding:0.25em 0.5em;border-radius:4px;}\n\
.note-item.active{font-weight:600;}\n\
.main{flex:1;display:flex;flex-direction:column;}\n\
.markdown-preview{flex:1;padding:1.5em 2em;max-width:60em;}\n\
.debate-header{font-weight:700;text-transform:uppercase;font-size:0.8em;letter-spacing:0.05em;}\n\
.render-error{font-style:italic;}\n\
.status-line{padding:0.25em 2em;font-size:0.85em;}\n\
.status-separator{margin:0 0.5em;}\n";

/// The complete stylesheet for `theme`.
pub fn stylesheet(theme: ThemeMode) -> String {
    let mut css = String::from(LAYOUT);
    match theme {
        ThemeMode::Light => css.push_str(&scheme_rules(&LIGHT, false)),
        ThemeMode::Dark => css.push_str(&scheme_rules(&DARK, true)),
        ThemeMode::Auto => {
            css.push_str(&scheme_rules(&LIGHT, false));
            let _ = write!(
                css,
                "@media (prefers-color-scheme: dark){{\n{}}}\n",
                scheme_rules(&DARK, true)
            );
        }
    }
    css
}
