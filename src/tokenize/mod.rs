//! Tokenizer contract.
//!
//! The console never implements the Quill grammar; the toolchain supplies a
//! [`Tokenize`] implementation and the console consumes its output. The
//! contract mirrors the toolchain lexer: tokens arrive in source order with
//! non-overlapping half-open byte ranges.

use thiserror::Error;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

/// Classification of a token, as coarse as completion needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    Keyword,
    Other,
}

impl TokenClass {
    /// Check whether a token of this class can be completed.
    ///
    /// Keywords count: while typing, a keyword is a valid prefix of an
    /// identifier the user may still be spelling out.
    pub fn is_completion_candidate(&self) -> bool {
        matches!(self, Self::Identifier | Self::Keyword)
    }
}

/// A token produced by the toolchain lexer.
///
/// `range` is a half-open byte range into the buffer that was tokenized.
/// Tokens are transient; nothing in this crate stores them past one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub range: TextRange,
    pub class: TokenClass,
}

impl Token {
    pub fn new(range: TextRange, class: TokenClass) -> Self {
        Self { range, class }
    }

    /// Start offset as usize for buffer indexing.
    pub fn start(&self) -> usize {
        u32::from(self.range.start()) as usize
    }

    /// End offset (exclusive) as usize for buffer indexing.
    pub fn end(&self) -> usize {
        u32::from(self.range.end()) as usize
    }
}

/// Errors a tokenizer may raise when diagnostics are not suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("malformed input at offset {offset}")]
    MalformedInput { offset: usize },
    #[error("tokenizer failure: {0}")]
    Internal(String),
}

/// Tokenizer seam supplied by the toolchain.
///
/// With `suppress_diagnostics` set, the implementation must not error on
/// malformed input; it classifies what it can and carries on. Callers that
/// cannot tolerate failure at all (completion) still guard the call.
pub trait Tokenize {
    fn tokenize(&self, text: &str, suppress_diagnostics: bool)
    -> Result<Vec<Token>, TokenizeError>;
}
