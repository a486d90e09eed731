//! Line acceptance: submit or continue on the submit key.

/// Outcome of a submit-key event.
///
/// `Continue` asks the editor to insert a new line and re-prompt with the
/// continuation prompt; `Submit` commits the buffer. Modeled as a value the
/// orchestrator branches on, never a thrown condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Submit,
    Continue,
}

/// Decide whether the submit key commits the buffer or asks for more input.
///
/// Continue when any non-whitespace follows the cursor (the user is editing
/// mid-line) or when `is_incomplete` reports the buffer syntactically open
/// (unbalanced bracket, unterminated string, trailing operator). The
/// predicate comes from the toolchain and is opaque here. An empty buffer
/// submits; whether to evaluate it is the caller's concern.
pub fn decide_acceptance(
    text: &str,
    cursor: usize,
    is_incomplete: &dyn Fn(&str) -> bool,
) -> Acceptance {
    let cursor_at_end = text
        .char_indices()
        .skip_while(|(i, _)| *i < cursor)
        .all(|(_, c)| c.is_whitespace());
    if !cursor_at_end || is_incomplete(text) {
        tracing::trace!(cursor_at_end, "continuation requested");
        Acceptance::Continue
    } else {
        Acceptance::Submit
    }
}
