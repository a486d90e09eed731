//! Diagnostic message values.

use smol_str::SmolStr;

/// A compiler message ready for rendering.
///
/// The body is the already-formatted text (possibly multi-line, possibly
/// carrying ANSI color escapes from the highlighter). `kind` is the severity
/// label printed in the header, e.g. "Error" or "Warning". Immutable once
/// constructed; the renderer only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub body: String,
    pub kind: SmolStr,
    pub explanation: Option<String>,
}

impl DiagnosticMessage {
    /// Create a message with the given kind label.
    pub fn new(kind: impl Into<SmolStr>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            kind: kind.into(),
            explanation: None,
        }
    }

    /// An "Error" message.
    pub fn error(body: impl Into<String>) -> Self {
        Self::new("Error", body)
    }

    /// A "Warning" message.
    pub fn warning(body: impl Into<String>) -> Self {
        Self::new("Warning", body)
    }

    /// Attach a long-form explanation.
    pub fn with_explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation = Some(text.into());
        self
    }

    /// Check if this message carries an explanation.
    pub fn has_explanation(&self) -> bool {
        self.explanation.is_some()
    }
}
