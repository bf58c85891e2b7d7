use super::{join_lines, split_lines, TextStore};
use crate::error::{Result, TandemError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, as if it already existed on disk.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    pub fn content(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl TextStore for InMemoryStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.files.get(path).ok_or_else(|| {
            TandemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })?;
        Ok(split_lines(content))
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        self.files.insert(path.to_path_buf(), join_lines(lines));
        Ok(())
    }
}
