//! Source positions for diagnostics.
//!
//! Stores the file and line/column span a diagnostic applies to. When the
//! diagnosed code was produced by inlining, `outer` links to the expansion
//! site, forming a singly-linked chain back to user-written code.

use smol_str::SmolStr;

/// A file plus line/column span identifying where a diagnostic applies.
///
/// Lines are 1-based as shown to the user; columns are 0-based character
/// offsets into the line. A span may cover several lines. The chain through
/// `outer` is acyclic by ownership: each position owns at most one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePos {
    pub file: SmolStr,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub outer: Option<Box<SourcePos>>,
}

impl SourcePos {
    /// Create a span from line/column coordinates.
    ///
    /// Requires `start_line <= end_line`, and `start_col <= end_col` when
    /// the span sits on a single line.
    pub fn new(
        file: impl Into<SmolStr>,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        debug_assert!(start_line <= end_line);
        debug_assert!(start_line != end_line || start_col <= end_col);
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
            outer: None,
        }
    }

    /// A zero-width position on a single line.
    pub fn at(file: impl Into<SmolStr>, line: u32, col: u32) -> Self {
        Self::new(file, line, col, line, col)
    }

    /// Attach the expansion site this position was inlined from.
    pub fn with_outer(mut self, outer: SourcePos) -> Self {
        self.outer = Some(Box::new(outer));
        self
    }

    /// Check whether the span starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}
