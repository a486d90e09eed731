//! Diagnostic rendering.
//!
//! Formats a [`DiagnosticMessage`] plus optional [`SourcePos`] into the
//! block the console prints: header rule, source excerpt with a line-number
//! prefix, caret marker under the diagnosed span, and the message body
//! padded to sit roughly beneath the caret without overflowing the page.
//!
//! The renderer produces strings only; the orchestrator owns the output
//! stream. It holds no mutable state, so concurrent call sites are fine as
//! long as each supplies its own message and writes through a synchronized
//! sink.

mod ansi;
mod source;

pub use ansi::{strip_ansi, visible_width};
pub use source::{SourceLines, SourceStore};

use crate::base::{DiagnosticMessage, SourcePos};

/// Hook mapping raw text to the same text with ANSI color escapes embedded.
pub type Highlight = dyn Fn(&str) -> String;

/// Identity highlighter for plain (uncolored) output.
pub fn no_highlight(text: &str) -> String {
    text.to_owned()
}

/// Outer-chain hops rendered before the walk is cut off. A malformed chain
/// cannot make the renderer loop.
const MAX_OUTER_DEPTH: usize = 32;

/// Fixed sentence printed under each expansion-origin header.
const INLINE_NOTE: &str = "This location is in code that was inlined at the location below.";

/// Renders diagnostics against a page width, a source-line store, and a
/// highlighter hook. All three are explicit; there is no global console
/// state.
pub struct DiagnosticRenderer<'a> {
    page_width: usize,
    sources: &'a dyn SourceLines,
    highlight: &'a Highlight,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(page_width: usize, sources: &'a dyn SourceLines, highlight: &'a Highlight) -> Self {
        Self {
            page_width,
            sources,
            highlight,
        }
    }

    /// Render the full diagnostic block.
    ///
    /// With a position: expansion-origin headers (outermost first), the
    /// header for the diagnosed file, the numbered excerpt, the caret
    /// marker, then the padded message body. Without one: header plus the
    /// raw body.
    pub fn render(&self, message: &DiagnosticMessage, pos: Option<&SourcePos>) -> String {
        let kind = message.kind.as_str();
        let Some(pos) = pos else {
            return format!("{}\n{}", self.header(kind, None), message.body);
        };

        let mut out = String::new();
        for outer in self.outer_chain(pos).iter().rev() {
            out.push_str(&self.header(kind, Some(&outer.file)));
            out.push('\n');
            out.push_str(INLINE_NOTE);
            out.push('\n');
            out.push_str(&self.rule());
            out.push('\n');
        }
        out.push_str(&self.header(kind, Some(&pos.file)));
        out.push('\n');

        match self.excerpt(pos) {
            Some((line, offset)) => {
                out.push_str(&line);
                out.push('\n');
                out.push_str(&self.caret_marker(pos, offset));
                out.push('\n');
                out.push_str(&self.padded_body(&message.body, offset, pos.start_col as usize));
            }
            None => {
                tracing::trace!(file = %pos.file, line = pos.start_line, "no source line for excerpt");
                out.push_str(&message.body);
            }
        }
        out
    }

    /// Render the long-form explanation block, if the message has one.
    pub fn render_explanation(&self, message: &DiagnosticMessage) -> Option<String> {
        let text = message.explanation.as_deref()?;
        Some(format!(
            "{}\n{}\n{}",
            (self.highlight)("Explanation"),
            (self.highlight)("==========="),
            text
        ))
    }

    /// Header line: `-- {kind}: {file} ` padded with dashes to the page
    /// width. Without a file the `: {file}` segment is omitted.
    fn header(&self, kind: &str, file: Option<&str>) -> String {
        let lead = match file {
            Some(file) => format!("-- {kind}: {file} "),
            None => format!("-- {kind} "),
        };
        let pad = self.page_width.saturating_sub(lead.chars().count());
        format!("{lead}{}", "-".repeat(pad))
    }

    /// Full-width separator rule.
    fn rule(&self) -> String {
        "-".repeat(self.page_width)
    }

    /// Expansion origins of `pos`, innermost first, capped in length.
    fn outer_chain<'p>(&self, pos: &'p SourcePos) -> Vec<&'p SourcePos> {
        let mut chain = Vec::new();
        let mut cur = pos.outer.as_deref();
        while let Some(outer) = cur {
            if chain.len() == MAX_OUTER_DEPTH {
                tracing::debug!(file = %pos.file, "outer position chain cut at depth limit");
                break;
            }
            chain.push(outer);
            cur = outer.outer.as_deref();
        }
        chain
    }

    /// Excerpt line `"{line}:" + highlighted text` and the width of the
    /// numeric prefix, used to align everything under the source column.
    fn excerpt(&self, pos: &SourcePos) -> Option<(String, usize)> {
        let text = self.sources.line(&pos.file, pos.start_line)?;
        let text = text.trim_end_matches(['\r', '\n']);
        let prefix = format!("{}:", pos.start_line);
        let offset = prefix.chars().count();
        Some((format!("{prefix}{}", (self.highlight)(text)), offset))
    }

    /// Caret line under the excerpt. Single-line spans underline the whole
    /// span (at least one caret); multi-line spans mark only the start.
    fn caret_marker(&self, pos: &SourcePos, offset: usize) -> String {
        let count = if pos.is_single_line() {
            pos.end_col.saturating_sub(pos.start_col).max(1) as usize
        } else {
            1
        };
        format!(
            "{}{}",
            " ".repeat(offset + pos.start_col as usize),
            (self.highlight)(&"^".repeat(count))
        )
    }

    /// Message body with one uniform left padding across all lines.
    ///
    /// Per line, the candidate padding keeps the printable text (escapes
    /// stripped before measuring) inside the page while pulling it toward
    /// the caret column; the minimum candidate wins so the block is not
    /// ragged. The longest line may still overflow the page width; that is
    /// the documented behavior, not a bug to fix here.
    fn padded_body(&self, body: &str, offset: usize, start_col: usize) -> String {
        let cap = offset + start_col;
        let pad = body
            .lines()
            .map(|line| cap.min(self.page_width.saturating_sub(offset + visible_width(line))))
            .min()
            .unwrap_or(0);
        let indent = " ".repeat(pad);
        body.lines()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
