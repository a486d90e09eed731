//! Completion-boundary lookup: the token under the cursor.

use smol_str::SmolStr;

use crate::tokenize::{Tokenize, TokenizeError};

/// The partial word a completion request should complete.
///
/// `cursor` is the edit cursor's offset relative to the start of the word.
/// Recomputed on every request; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedWord {
    pub word: SmolStr,
    pub cursor: usize,
}

impl ParsedWord {
    /// The no-match value: empty word, offset 0.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Find the identifier-or-keyword token enclosing `cursor`.
///
/// Tokenizes with diagnostics suppressed and walks the tokens in source
/// order; the first candidate whose closed span `[start, end]` contains the
/// cursor wins (spans are ordered and non-overlapping, so at most one can).
/// A cursor in whitespace or punctuation, or a tokenizer failure despite
/// suppression, yields [`ParsedWord::empty`] — a completion request must
/// never take the session down.
pub fn word_at_cursor(text: &str, cursor: usize, tokenizer: &dyn Tokenize) -> ParsedWord {
    let tokens = match tokenizer.tokenize(text, true) {
        Ok(tokens) => tokens,
        Err(err) => {
            trace_recovery(&err);
            return ParsedWord::empty();
        }
    };

    for token in tokens {
        if !token.class.is_completion_candidate() {
            continue;
        }
        let (start, end) = (token.start(), token.end());
        if start <= cursor && cursor <= end {
            return ParsedWord {
                word: SmolStr::new(&text[start..end]),
                cursor: cursor - start,
            };
        }
    }
    ParsedWord::empty()
}

fn trace_recovery(err: &TokenizeError) {
    tracing::trace!(%err, "completion tokenization failed; returning empty word");
}
