use super::{join_lines, split_lines, TextStore};
use crate::error::{Result, TandemError};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Production file-backed store.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl TextStore for FileStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).map_err(TandemError::Io)?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        let content = std::str::from_utf8(bytes).map_err(|_| TandemError::Decode {
            path: path.to_path_buf(),
        })?;
        Ok(split_lines(content))
    }

    fn read_lines_range(&self, path: &Path, start: usize, count: usize) -> Result<Vec<String>> {
        let file = File::open(path).map_err(TandemError::Io)?;
        let reader = BufReader::new(file);

        let mut lines = Vec::with_capacity(count);
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => TandemError::Decode {
                    path: path.to_path_buf(),
                },
                _ => TandemError::Io(e),
            })?;
            if i < start {
                continue;
            }
            if lines.len() == count {
                break;
            }
            let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
            // A BOM only ever precedes the first line
            let line = if i == 0 {
                line.strip_prefix('\u{feff}').unwrap_or(&line).to_string()
            } else {
                line
            };
            lines.push(line);
        }
        Ok(lines)
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(TandemError::Io)?;

        tmp.write_all(join_lines(lines).as_bytes())
            .map_err(TandemError::Io)?;

        // Replace the target only once the full content is on disk, so a
        // failed write never truncates the original.
        tmp.persist(path).map_err(|e| TandemError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_line_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.txt");
        std::fs::write(&path, "Hello\nWorld\n").unwrap();

        let store = FileStore::new();
        let lines = store.read_lines(&path).unwrap();
        assert_eq!(lines, vec!["Hello", "World"]);

        let mut store = FileStore::new();
        store.write_lines(&path, &lines).unwrap();
        let reread = store.read_lines(&path).unwrap();
        assert_eq!(reread, lines);
    }

    #[test]
    fn strips_utf8_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFHola\nMundo").unwrap();

        let lines = FileStore::new().read_lines(&path).unwrap();
        assert_eq!(lines, vec!["Hola", "Mundo"]);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xE9").unwrap();

        let err = FileStore::new().read_lines(&path).unwrap_err();
        assert!(matches!(err, TandemError::Decode { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileStore::new()
            .read_lines(&dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(err, TandemError::Io(_)));
    }

    #[test]
    fn ranged_read_matches_whole_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paged.txt");
        let all: Vec<String> = (0..50).map(|i| format!("line {}", i)).collect();
        std::fs::write(&path, all.join("\n")).unwrap();

        let store = FileStore::new();
        assert_eq!(store.read_lines_range(&path, 10, 5).unwrap(), all[10..15]);
        assert_eq!(store.read_lines_range(&path, 48, 10).unwrap(), all[48..]);
        assert!(store.read_lines_range(&path, 60, 5).unwrap().is_empty());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content\nwith lines\nand more\n").unwrap();

        let mut store = FileStore::new();
        store
            .write_lines(&path, &["new".to_string(), "content".to_string()])
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\ncontent");
    }
}
