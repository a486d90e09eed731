//! Interactive line engine.
//!
//! Pure decision functions the orchestrator calls from its read loop:
//! - [`decide_acceptance`] - submit vs continue on the submit key
//! - [`word_at_cursor`] - the completion boundary under the edit cursor
//!
//! Plus the session value types: [`SessionConfig`] (prompts, page width)
//! and [`InputEvent`] (lines vs terminal conditions).
//!
//! Both engines are side-effect-free over `(buffer text, cursor)` and hold
//! no state between invocations.

mod accept;
mod complete;
mod session;

pub use accept::{Acceptance, decide_acceptance};
pub use complete::{ParsedWord, word_at_cursor};
pub use session::{InputEvent, SessionConfig};
