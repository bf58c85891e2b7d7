use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TandemError;

/// Which column of the pair an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            other => Err(TandemError::Api(format!(
                "Unknown side '{}', expected 'left' or 'right'",
                other
            ))),
        }
    }
}

/// One line of text plus its dirty flag. Lines start clean at load or insert
/// time; only cell edits and row moves mark them modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub modified: bool,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: false,
        }
    }

    pub fn empty() -> Self {
        Self::new("")
    }
}

/// An ordered sequence of lines tied to an (optional) source file and an
/// (optional) language label. The label is display metadata only.
#[derive(Debug, Clone, Default)]
pub struct Column {
    pub lines: Vec<Line>,
    pub path: Option<PathBuf>,
    pub language: Option<String>,
}

impl Column {
    pub fn from_texts(texts: Vec<String>) -> Self {
        Self {
            lines: texts.into_iter().map(Line::new).collect(),
            path: None,
            language: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line texts in order, for persistence.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }

    pub fn clear_modified(&mut self) {
        for line in &mut self.lines {
            line.modified = false;
        }
    }
}

/// Two columns kept the same length. Row `i` on the left is aligned with row
/// `i` on the right—positional correspondence, no separate alignment map.
///
/// Invariant: after any completed editor operation,
/// `left.len() == right.len()`. Row operations in `commands::rows` act on
/// both columns in lockstep to preserve this; [`DocumentPair::equalize`]
/// restores it after loading files of different lengths.
#[derive(Debug, Clone, Default)]
pub struct DocumentPair {
    pub left: Column,
    pub right: Column,
}

impl DocumentPair {
    pub fn new(left: Column, right: Column) -> Self {
        let mut pair = Self { left, right };
        pair.equalize();
        pair
    }

    /// Number of aligned rows. Both columns have this length.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.left.len(), self.right.len());
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column(&self, side: Side) -> &Column {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn column_mut(&mut self, side: Side) -> &mut Column {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn line(&self, side: Side, row: usize) -> Option<&Line> {
        self.column(side).lines.get(row)
    }

    /// Pad the shorter column with clean empty lines until both columns have
    /// the same length.
    pub fn equalize(&mut self) {
        let target = self.left.len().max(self.right.len());
        self.left.lines.resize_with(target, Line::empty);
        self.right.lines.resize_with(target, Line::empty);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColumnStats {
    pub line_count: usize,
    pub word_count: usize,
    pub modified_count: usize,
}

/// Derived, read-only view over a [`DocumentPair`]. Recomputed on demand by
/// `commands::stats`, never maintained incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub left: ColumnStats,
    pub right: ColumnStats,
}
