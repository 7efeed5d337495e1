//! End-to-end rendering of notes.

use debbynote::document::{Block, Pipeline, segment, to_html};
use debbynote::editor::{FormatOp, Selection, apply, continue_list};

const ROUND: &str = include_str!("fixtures/round.md");

#[test]
fn test_green_highlight_wraps_converted_content() {
    let html = to_html("!r hello");
    assert!(
        html.contains(r#"<span class="md-highlight-green"><p>hello</p>"#),
        "got: {html}"
    );
}

#[test]
fn test_prime_minister_block() {
    let html = to_html("!pm I propose...");
    assert!(html.contains(r#"<div class="debate-pm">"#), "got: {html}");
    assert!(html.contains(r#"<div class="debate-header">Prime Minister</div>"#));
    assert!(html.contains(r#"<div class="debate-content"><p>I propose...</p>"#));
}

#[test]
fn test_unknown_token_renders_as_plain_text() {
    assert_eq!(segment("!x hello"), vec![Block::Normal("!x hello".to_string())]);
    let html = to_html("!x hello");
    assert!(html.contains("<p>!x hello</p>"), "got: {html}");
    assert!(!html.contains("md-highlight"));
}

#[test]
fn test_tokens_are_case_insensitive() {
    let html = to_html("!PM Opening\n\n!WB weigh");
    assert!(html.contains("debate-pm"));
    assert!(html.contains("md-highlight-blue"));
}

#[test]
fn test_token_only_recognized_at_block_start() {
    let html = to_html("intro !a not a highlight");
    assert!(!html.contains("md-highlight"));
}

#[test]
fn test_lists_do_not_continue_across_highlight() {
    let html = to_html("- one\n\n!a aside\n\n- two");
    assert_eq!(html.matches("<ul>").count(), 2, "got: {html}");
}

#[test]
fn test_soft_breaks_inside_highlight() {
    let html = to_html("!info first\nsecond");
    assert!(html.contains("first<br>"), "got: {html}");
}

#[test]
fn test_fixture_round_renders_every_role() {
    let blocks = segment(ROUND);
    let roles = blocks
        .iter()
        .filter(|b| matches!(b, Block::DebateRole { .. }))
        .count();
    let highlights = blocks
        .iter()
        .filter(|b| matches!(b, Block::Highlight { .. }))
        .count();
    assert_eq!(roles, 8);
    assert_eq!(highlights, 4);

    let html = to_html(ROUND);
    for class in ["debate-pm", "debate-lo", "debate-dpm", "debate-dlo", "debate-gw", "debate-ow"] {
        assert!(html.contains(class), "missing {class}");
    }
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>"));
    assert!(html.contains("<u>"));
}

#[test]
fn test_output_is_deterministic() {
    let pipeline = Pipeline::new();
    assert_eq!(pipeline.to_html(ROUND), pipeline.to_html(ROUND));
    assert_eq!(to_html(ROUND), pipeline.to_html(ROUND));
}

#[test]
fn test_unsafe_markup_is_removed_everywhere() {
    let note = "<script>alert(1)</script>\n\n!a <a href=\"javascript:alert(1)\">x</a>\n\n!lo <img src=x onerror=alert(1)>";
    let html = to_html(note);
    assert!(!html.contains("<script"), "got: {html}");
    assert!(!html.contains("javascript:"), "got: {html}");
    assert!(!html.contains("onerror"), "got: {html}");
    assert!(html.contains("debate-lo"));
}

#[test]
fn test_editing_then_rendering() {
    let edit = apply(FormatOp::Bold, "hello world", Selection::new(0, 5));
    assert_eq!(edit.text, "**hello** world");
    assert_eq!(edit.selection, Selection::new(0, 9));
    assert!(to_html(&edit.text).contains("<strong>hello</strong>"));

    let edit = apply(FormatOp::Separator, "ab", Selection::cursor(1));
    assert_eq!(edit.text, "a\n\n---\n\nb");
    assert_eq!(edit.selection, Selection::cursor(8));
    assert!(to_html(&edit.text).contains("<hr"));
}

#[test]
fn test_list_continuation_examples() {
    let edit = continue_list("- item\n", 6).expect("continues");
    assert_eq!(edit.text, "- item\n- \n");
    assert_eq!(edit.selection, Selection::cursor(9));

    let edit = continue_list("1. x", 4).expect("continues");
    assert_eq!(edit.text, "1. x\n2. ");

    let edit = continue_list("- ", 2).expect("closes list");
    assert_eq!(edit.text, "");
    assert_eq!(edit.selection, Selection::cursor(0));
}
