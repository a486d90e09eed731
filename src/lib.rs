//! # quill-console
//!
//! Console front end for the Quill toolchain: diagnostic rendering, line
//! acceptance, and completion-boundary lookup.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! repl      → Line acceptance, completion word lookup, session config
//!   ↓
//! render    → Diagnostic renderer, source-line store, ANSI width utilities
//!   ↓
//! tokenize  → Tokenizer contract (Token, TokenClass, Tokenize trait)
//!   ↓
//! base      → Primitives (SourcePos, DiagnosticMessage)
//! ```
//!
//! The tokenizer grammar, terminal raw-mode handling, history persistence,
//! and syntax-color classification all live outside this crate; they are
//! reached through the narrow seams in [`tokenize`] and [`render`].

// ============================================================================
// MODULES (dependency order: base → tokenize → render → repl)
// ============================================================================

/// Foundation types: SourcePos, DiagnosticMessage
pub mod base;

/// Tokenizer contract: Token, TokenClass, Tokenize trait
pub mod tokenize;

/// Diagnostic rendering: headers, excerpts, caret markers, ANSI widths
pub mod render;

/// Interactive line engine: acceptance, completion boundary, session config
pub mod repl;

// Re-export foundation types
pub use base::{DiagnosticMessage, SourcePos};
pub use render::{DiagnosticRenderer, SourceLines, SourceStore};
pub use repl::{Acceptance, InputEvent, ParsedWord, SessionConfig};
pub use tokenize::{TextRange, TextSize, Token, TokenClass, Tokenize, TokenizeError};
