//! Source-line lookup for diagnostic excerpts.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Line lookup used by the renderer to fetch the excerpt under a caret.
///
/// `line` is 1-based, matching the numbers printed in excerpt prefixes.
pub trait SourceLines {
    fn line(&self, file: &str, line: u32) -> Option<&str>;
}

/// In-memory source text keyed by file name.
///
/// The orchestrator fills this as the session accumulates input: whole
/// files via [`SourceStore::insert`], interactive entries a line at a time
/// via [`SourceStore::push_line`].
#[derive(Debug, Clone, Default)]
pub struct SourceStore {
    files: FxHashMap<SmolStr, Vec<String>>,
}

impl SourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of `file`, splitting `text` into lines.
    pub fn insert(&mut self, file: impl Into<SmolStr>, text: &str) {
        self.files
            .insert(file.into(), text.lines().map(str::to_owned).collect());
    }

    /// Append one line to `file`, creating it if needed.
    pub fn push_line(&mut self, file: impl Into<SmolStr>, line: impl Into<String>) {
        self.files.entry(file.into()).or_default().push(line.into());
    }
}

impl SourceLines for SourceStore {
    fn line(&self, file: &str, line: u32) -> Option<&str> {
        let index = line.checked_sub(1)? as usize;
        self.files.get(file)?.get(index).map(String::as_str)
    }
}
