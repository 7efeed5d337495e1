//! Block-prefix tokens and the rendering treatment each one selects.
//!
//! The table is the only place that knows which prefixes exist. Segmentation
//! builds its patterns from it and rendering looks treatments up in it, so a
//! new token is a new table row.

use std::sync::LazyLock;

use regex::Regex;

/// How a block introduced by a token is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    /// A single colored container.
    Highlight { class: &'static str },
    /// A titled container for a speaking role.
    DebateRole {
        title: &'static str,
        class: &'static str,
    },
}

impl Treatment {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Highlight { class } | Self::DebateRole { class, .. } => class,
        }
    }
}

/// Class used when a highlight block carries a token missing from the table.
pub const FALLBACK_HIGHLIGHT_CLASS: &str = "md-highlight-red";

/// Highlight tokens: argument, rebuttal, worldbuilding, key information.
pub const HIGHLIGHT_TOKENS: &[(&str, Treatment)] = &[
    ("!a", Treatment::Highlight { class: "md-highlight-red" }),
    ("!r", Treatment::Highlight { class: "md-highlight-green" }),
    ("!wb", Treatment::Highlight { class: "md-highlight-blue" }),
    ("!info", Treatment::Highlight { class: "md-highlight-yellow" }),
];

/// British Parliamentary and government/opposition speaker positions.
pub const DEBATE_ROLE_TOKENS: &[(&str, Treatment)] = &[
    ("!og1", role("Opening Government 1st Speaker", "debate-og1")),
    ("!og2", role("Opening Government 2nd Speaker", "debate-og2")),
    ("!oo1", role("Opening Opposition 1st Speaker", "debate-oo1")),
    ("!oo2", role("Opening Opposition 2nd Speaker", "debate-oo2")),
    ("!cg1", role("Closing Government 1st Speaker", "debate-cg1")),
    ("!cg2", role("Closing Government 2nd Speaker", "debate-cg2")),
    ("!co1", role("Closing Opposition 1st Speaker", "debate-co1")),
    ("!co2", role("Closing Opposition 2nd Speaker", "debate-co2")),
    ("!pm", role("Prime Minister", "debate-pm")),
    ("!lo", role("Leader of Opposition", "debate-lo")),
    ("!dpm", role("Deputy Prime Minister", "debate-dpm")),
    ("!dlo", role("Deputy Leader of Opposition", "debate-dlo")),
    ("!gw", role("Government Whip", "debate-gw")),
    ("!ow", role("Opposition Whip", "debate-ow")),
];

const fn role(title: &'static str, class: &'static str) -> Treatment {
    Treatment::DebateRole { title, class }
}

/// `^(token)\s(rest)` over the debate-role tokens, case-insensitive.
pub(super) static DEBATE_ROLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| prefix_pattern(DEBATE_ROLE_TOKENS));

/// `^(token)\s(rest)` over the highlight tokens, case-insensitive.
pub(super) static HIGHLIGHT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| prefix_pattern(HIGHLIGHT_TOKENS));

fn prefix_pattern(table: &[(&str, Treatment)]) -> Regex {
    let alternation = table
        .iter()
        .map(|(token, _)| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?is)\A({alternation})\s(.*)\z")).expect("token pattern is valid")
}

/// Look up the treatment for a token, ignoring ASCII case.
pub fn lookup(token: &str) -> Option<Treatment> {
    HIGHLIGHT_TOKENS
        .iter()
        .chain(DEBATE_ROLE_TOKENS)
        .find(|(known, _)| known.eq_ignore_ascii_case(token))
        .map(|(_, treatment)| *treatment)
}

/// Every known token with its treatment, highlight family first.
pub fn all() -> impl Iterator<Item = (&'static str, Treatment)> {
    HIGHLIGHT_TOKENS.iter().chain(DEBATE_ROLE_TOKENS).copied()
}
