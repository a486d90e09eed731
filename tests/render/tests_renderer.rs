//! Diagnostic block rendering tests.
//!
//! Covers header padding, excerpt/caret alignment, uniform body padding,
//! the no-position path, and expansion-origin chains.

use quill_console::render::{DiagnosticRenderer, SourceStore, no_highlight};
use quill_console::{DiagnosticMessage, SourcePos};
use rstest::rstest;

const INLINE_NOTE: &str = "This location is in code that was inlined at the location below.";

/// Store with `text` at the given 1-based line of `file` (earlier lines empty).
fn store_with_line(file: &str, line: u32, text: &str) -> SourceStore {
    let mut store = SourceStore::new();
    for _ in 1..line {
        store.push_line(file, "");
    }
    store.push_line(file, text);
    store
}

fn red(text: &str) -> String {
    format!("\u{1b}[31m{text}\u{1b}[0m")
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_padded_to_page_width() {
    let store = store_with_line("demo.quill", 1, "abc");
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let out = renderer.render(&DiagnosticMessage::error("oops"), Some(&SourcePos::at("demo.quill", 1, 0)));

    let header = out.lines().next().unwrap();
    assert_eq!(header, format!("-- Error: demo.quill {}", "-".repeat(59)));
    assert_eq!(header.chars().count(), 80);
}

#[test]
fn test_header_width_clamped_never_negative() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(5, &store, &no_highlight);
    let out = renderer.render(
        &DiagnosticMessage::error("oops"),
        Some(&SourcePos::at("a-rather-long-name.quill", 1, 0)),
    );

    // Lead is wider than the page; no dashes, no panic.
    assert_eq!(out.lines().next().unwrap(), "-- Error: a-rather-long-name.quill ");
}

// ============================================================================
// Excerpt and caret marker
// ============================================================================

#[test]
fn test_single_line_block_layout() {
    let store = store_with_line("demo.quill", 10, "  val x = 1");
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let msg = DiagnosticMessage::error("unknown name");
    let pos = SourcePos::new("demo.quill", 10, 3, 10, 6);

    let out = renderer.render(&msg, Some(&pos));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[1], "10:  val x = 1");
    // "10:" prefix is 3 wide; start_col 3 → 6 leading spaces, 3 carets.
    assert_eq!(lines[2], "      ^^^");
    // Body padding: min(80 - 3 - 12, 3 + 3) = 6.
    assert_eq!(lines[3], "      unknown name");
    assert_eq!(lines.len(), 4);
}

#[rstest]
#[case(3, 3, 1)]
#[case(3, 6, 3)]
#[case(0, 4, 4)]
#[case(9, 9, 1)]
fn test_single_line_caret_length(#[case] start_col: u32, #[case] end_col: u32, #[case] carets: usize) {
    let store = store_with_line("w.quill", 1, "abcdefghij");
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let pos = SourcePos::new("w.quill", 1, start_col, 1, end_col);

    let out = renderer.render(&DiagnosticMessage::error("x"), Some(&pos));
    let marker = out.lines().nth(2).unwrap();
    // "1:" prefix is 2 wide.
    assert_eq!(
        marker,
        format!("{}{}", " ".repeat(2 + start_col as usize), "^".repeat(carets))
    );
}

#[test]
fn test_multi_line_span_marks_start_only() {
    let store = store_with_line("w.quill", 1, "abcdefghij");
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let pos = SourcePos::new("w.quill", 1, 4, 2, 1);

    let out = renderer.render(&DiagnosticMessage::error("x"), Some(&pos));
    assert_eq!(out.lines().nth(2).unwrap(), "      ^");
}

#[test]
fn test_excerpt_and_caret_pass_through_highlighter() {
    let store = store_with_line("demo.quill", 10, "  val x = 1");
    let renderer = DiagnosticRenderer::new(80, &store, &red);
    let pos = SourcePos::new("demo.quill", 10, 3, 10, 6);

    let out = renderer.render(&DiagnosticMessage::error("x"), Some(&pos));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], format!("10:{}", red("  val x = 1")));
    assert_eq!(lines[2], format!("      {}", red("^^^")));
}

// ============================================================================
// Message body padding
// ============================================================================

#[rstest]
// Wide page: both candidates hit the caret-column cap of 5.
#[case(50, 5)]
// Narrow page: the 40-wide line allows only 1; applied to both.
#[case(44, 1)]
// Very narrow page: clamped to zero, never negative.
#[case(20, 0)]
fn test_body_padding_uniform_across_lines(#[case] page_width: usize, #[case] pad: usize) {
    let store = store_with_line("demo.quill", 10, "  val x = 1");
    let renderer = DiagnosticRenderer::new(page_width, &store, &no_highlight);
    let body = format!("{}\n{}", "a".repeat(10), "b".repeat(40));
    let pos = SourcePos::new("demo.quill", 10, 2, 10, 2);

    let out = renderer.render(&DiagnosticMessage::error(body), Some(&pos));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[3], format!("{}{}", " ".repeat(pad), "a".repeat(10)));
    assert_eq!(lines[4], format!("{}{}", " ".repeat(pad), "b".repeat(40)));
}

#[test]
fn test_body_padding_measures_stripped_width() {
    let store = store_with_line("demo.quill", 10, "  val x = 1");
    let renderer = DiagnosticRenderer::new(44, &store, &no_highlight);
    let colored = red(&"b".repeat(40));
    let pos = SourcePos::new("demo.quill", 10, 2, 10, 2);

    let out = renderer.render(&DiagnosticMessage::error(colored.clone()), Some(&pos));
    // Visible width is 40, so the candidate is 44 - 3 - 40 = 1 despite the
    // escape bytes.
    assert_eq!(out.lines().nth(3).unwrap(), format!(" {colored}"));
}

// ============================================================================
// No-position and missing-excerpt paths
// ============================================================================

#[test]
fn test_no_position_renders_header_and_raw_body() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);

    let out = renderer.render(&DiagnosticMessage::error("something failed"), None);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("-- Error {}", "-".repeat(71)));
    assert_eq!(lines[1], "something failed");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_missing_source_line_skips_excerpt() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let pos = SourcePos::new("gone.quill", 3, 0, 3, 2);

    let out = renderer.render(&DiagnosticMessage::warning("careful"), Some(&pos));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("-- Warning: gone.quill {}", "-".repeat(57)));
    assert_eq!(lines[1], "careful");
    assert_eq!(lines.len(), 2);
}

// ============================================================================
// Expansion-origin chains
// ============================================================================

#[test]
fn test_outer_chain_prepends_origin_header() {
    let store = store_with_line("inlined.quill", 1, "abc");
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let pos = SourcePos::new("inlined.quill", 1, 0, 1, 3).with_outer(SourcePos::at("main.quill", 2, 0));

    let out = renderer.render(&DiagnosticMessage::error("oops"), Some(&pos));
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("-- Error: main.quill "));
    assert_eq!(lines[1], INLINE_NOTE);
    assert_eq!(lines[2], "-".repeat(80));
    assert!(lines[3].starts_with("-- Error: inlined.quill "));
    assert_eq!(lines[4], "1:abc");
    assert_eq!(lines[5], "  ^^^");
}

#[test]
fn test_outer_chain_outermost_origin_first() {
    let store = store_with_line("inner.quill", 1, "x");
    let renderer = DiagnosticRenderer::new(40, &store, &no_highlight);
    let pos = SourcePos::at("inner.quill", 1, 0)
        .with_outer(SourcePos::at("mid.quill", 5, 0).with_outer(SourcePos::at("top.quill", 9, 0)));

    let out = renderer.render(&DiagnosticMessage::error("oops"), Some(&pos));
    let top = out.find("top.quill").unwrap();
    let mid = out.find("mid.quill").unwrap();
    let inner = out.find("inner.quill").unwrap();
    assert!(top < mid && mid < inner);
}

#[test]
fn test_degenerate_outer_chain_is_bounded() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(40, &store, &no_highlight);

    let mut pos = SourcePos::at("origin.quill", 1, 0);
    for i in 0..40 {
        pos = SourcePos::at(format!("hop{i}.quill"), 1, 0).with_outer(pos);
    }

    let out = renderer.render(&DiagnosticMessage::error("oops"), Some(&pos));
    assert_eq!(out.matches(INLINE_NOTE).count(), 32);
}

// ============================================================================
// Explanation
// ============================================================================

#[test]
fn test_explanation_banner() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    let msg = DiagnosticMessage::error("bad call").with_explanation("Arguments must match the declared arity.");

    let out = renderer.render_explanation(&msg).unwrap();
    assert_eq!(
        out,
        "Explanation\n===========\nArguments must match the declared arity."
    );
}

#[test]
fn test_explanation_banner_is_highlighted() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(80, &store, &red);
    let msg = DiagnosticMessage::error("bad call").with_explanation("Details.");

    let out = renderer.render_explanation(&msg).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], red("Explanation"));
    assert_eq!(lines[1], red("==========="));
    assert_eq!(lines[2], "Details.");
}

#[test]
fn test_no_explanation_renders_nothing() {
    let store = SourceStore::new();
    let renderer = DiagnosticRenderer::new(80, &store, &no_highlight);
    assert!(renderer.render_explanation(&DiagnosticMessage::error("x")).is_none());
}
