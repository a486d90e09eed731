//! ANSI escape handling for width measurement.
//!
//! The highlighter hook embeds CSI color sequences in text it returns. The
//! renderer must measure printable width, so escapes are stripped before
//! counting. A CSI sequence is `ESC [`, parameter/intermediate bytes, then
//! one final byte in `0x40..=0x7E`.

/// Remove ANSI CSI escape sequences from `text`.
///
/// A bare `ESC` not followed by `[` is dropped as well, so the output never
/// contains escape bytes and the function is idempotent.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            for d in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&d) {
                    break;
                }
            }
        }
    }
    out
}

/// Printable width of `text`: character count after escape stripping.
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
