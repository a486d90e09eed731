//! Session configuration and input events.

use smol_str::SmolStr;

use super::Acceptance;

/// Configuration threaded into the console: prompts and page width.
///
/// Constructed once by the orchestrator and passed explicitly; nothing in
/// this crate reads terminal size or global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: SmolStr,
    pub continuation_prompt: SmolStr,
    pub page_width: usize,
}

impl SessionConfig {
    pub fn new(
        prompt: impl Into<SmolStr>,
        continuation_prompt: impl Into<SmolStr>,
        page_width: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            continuation_prompt: continuation_prompt.into(),
            page_width,
        }
    }

    /// Prompt to show after an acceptance decision.
    pub fn prompt_for(&self, acceptance: Acceptance) -> &str {
        match acceptance {
            Acceptance::Submit => &self.prompt,
            Acceptance::Continue => &self.continuation_prompt,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(">> ", ".. ", 80)
    }
}

/// One event read from the line editor.
///
/// End-of-session conditions are distinguished variants, so an interrupt or
/// editor EOF is never mistaken for an ordinary empty submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A committed line of input.
    Line(String),
    /// The interrupt keystroke.
    Interrupted,
    /// The editor reported end of input.
    EndOfSession,
}

impl InputEvent {
    /// Check whether this event ends the read loop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Line(_))
    }
}
