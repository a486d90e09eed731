//! Foundation types for the Quill console.
//!
//! This module provides the value types shared by the renderer and the
//! line engine:
//! - [`SourcePos`] - file + line/column span, chained through inline
//!   expansion origins
//! - [`DiagnosticMessage`] - rendered message body, kind label, optional
//!   long-form explanation
//!
//! This module has NO dependencies on other quill-console modules.

mod message;
mod position;

pub use message::DiagnosticMessage;
pub use position::SourcePos;
