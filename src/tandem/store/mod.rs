//! # Storage Layer
//!
//! This module defines the storage abstraction for tandem. The [`TextStore`]
//! trait allows the core to read and write line-delimited text files without
//! knowing where they live.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - UTF-8 only; a leading BOM is stripped, invalid bytes fail with
//!     `Decode`
//!   - Ranged reads stream the file instead of materializing it
//!   - Writes go to a temp file in the target directory, then replace the
//!     target, so a failed save never truncates the original
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Line Conventions
//!
//! Input tolerates `\r\n` (the `\r` is stripped); a trailing newline does not
//! produce an extra empty line. Output joins lines with `\n` and writes no
//! trailing newline.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for reading and writing line-delimited text.
pub trait TextStore {
    /// Read a whole file as an ordered sequence of lines.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Read `count` lines starting at line `start` (zero-based). Used by
    /// display layers to page through large files.
    ///
    /// The default delegates to [`TextStore::read_lines`]; implementations
    /// may override with a streaming variant.
    fn read_lines_range(&self, path: &Path, start: usize, count: usize) -> Result<Vec<String>> {
        let lines = self.read_lines(path)?;
        Ok(lines.into_iter().skip(start).take(count).collect())
    }

    /// Write lines to `path`, replacing any existing content.
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()>;
}

/// Split file content into lines: `\n` delimited, `\r\n` tolerated, trailing
/// newline not treated as an extra empty line.
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix('\n').unwrap_or(content);
    content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

pub(crate) fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
