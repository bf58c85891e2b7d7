//! # API Facade
//!
//! [`Session`] is the single entry point for all tandem operations,
//! regardless of the UI driving it. It owns the loaded [`DocumentPair`] and
//! the storage backend—there is deliberately no global document state; a
//! caller creates a session, works it, and drops it.
//!
//! The facade:
//! - **Dispatches** to the command layer for business logic
//! - **Wires** the storage backend to load/save/reload
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! ## Generic Over TextStore
//!
//! `Session<S: TextStore>` is generic over the storage backend:
//! - Production: `Session<FileStore>`
//! - Testing: `Session<InMemoryStore>`
//!
//! This enables testing the full load→edit→save cycle without touching the
//! filesystem.

use std::path::PathBuf;

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{Result, TandemError};
use crate::model::{Column, DocumentPair, Side};
use crate::store::TextStore;

pub struct Session<S: TextStore> {
    store: S,
    pair: DocumentPair,
}

impl<S: TextStore> Session<S> {
    /// A session with an empty document pair; call [`Session::open`] to load
    /// files into it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            pair: DocumentPair::default(),
        }
    }

    pub fn pair(&self) -> &DocumentPair {
        &self.pair
    }

    /// Load a file into each column. Either side may be absent; files of
    /// different lengths are padded with empty lines so the columns align.
    pub fn open(&mut self, left: Option<PathBuf>, right: Option<PathBuf>) -> Result<CmdResult> {
        let left = self.load_column(left)?;
        let right = self.load_column(right)?;
        self.pair = DocumentPair::new(left, right);

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Loaded {} aligned rows",
            self.pair.len()
        )));
        Ok(result)
    }

    fn load_column(&self, path: Option<PathBuf>) -> Result<Column> {
        match path {
            Some(path) => {
                let texts = self.store.read_lines(&path)?;
                Ok(Column::from_texts(texts).with_path(path))
            }
            None => Ok(Column::default()),
        }
    }

    /// Display metadata only; labels have no effect on core logic.
    pub fn set_language(&mut self, side: Side, label: Option<String>) {
        self.pair.column_mut(side).language = label;
    }

    /// A window of `count` aligned rows starting at `start`.
    pub fn rows(&self, start: usize, count: usize) -> Result<CmdResult> {
        Ok(CmdResult::default().with_rows(commands::view::range(&self.pair, start, count)))
    }

    pub fn insert_row(&mut self, index: usize) -> Result<CmdResult> {
        commands::rows::insert(&mut self.pair, index)
    }

    pub fn delete_row(&mut self, index: usize) -> Result<CmdResult> {
        commands::rows::delete(&mut self.pair, index)
    }

    pub fn move_row(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        commands::rows::move_to(&mut self.pair, from, to)
    }

    pub fn edit_cell(&mut self, row: usize, side: Side, text: &str) -> Result<CmdResult> {
        commands::edit::cell(&mut self.pair, row, side, text)
    }

    pub fn find(
        &self,
        query: &str,
        start_row: usize,
        start_side: Side,
        wrap: bool,
    ) -> Result<CmdResult> {
        let found = commands::search::find(&self.pair, query, start_row, start_side, wrap);
        Ok(self.search_result(query, found.into_iter().collect()))
    }

    pub fn find_previous(
        &self,
        query: &str,
        start_row: usize,
        start_side: Side,
        wrap: bool,
    ) -> Result<CmdResult> {
        let found = commands::search::find_previous(&self.pair, query, start_row, start_side, wrap);
        Ok(self.search_result(query, found.into_iter().collect()))
    }

    pub fn find_all(&self, query: &str) -> Result<CmdResult> {
        let matches = commands::search::find_all(&self.pair, query);
        Ok(self.search_result(query, matches))
    }

    fn search_result(&self, query: &str, matches: Vec<commands::Match>) -> CmdResult {
        let mut result = CmdResult::default();
        if matches.is_empty() {
            result.add_message(CmdMessage::info(format!("No matches for '{}'", query)));
        }
        result.with_matches(matches)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_stats(commands::stats::compute(&self.pair)))
    }

    /// Persist every column that has a source path, overwriting the
    /// originals. Clears the modified flags of each saved column.
    pub fn save(&mut self) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let mut saved = 0;

        for side in [Side::Left, Side::Right] {
            if let Some(path) = self.pair.column(side).path.clone() {
                let texts = self.pair.column(side).texts();
                self.store.write_lines(&path, &texts)?;
                self.pair.column_mut(side).clear_modified();
                result.add_message(CmdMessage::success(format!(
                    "Saved {} ({} lines)",
                    path.display(),
                    texts.len()
                )));
                saved += 1;
            }
        }

        if saved == 0 {
            result.add_message(CmdMessage::warning("There are no files to save"));
        }
        Ok(result)
    }

    /// Write one column to a new path and rebind the column to it.
    pub fn save_as(&mut self, side: Side, path: PathBuf) -> Result<CmdResult> {
        let texts = self.pair.column(side).texts();
        self.store.write_lines(&path, &texts)?;

        let column = self.pair.column_mut(side);
        column.path = Some(path.clone());
        column.clear_modified();

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Saved {} column as {}",
            side,
            path.display()
        )));
        Ok(result)
    }

    /// Drop all in-memory edits and re-read both columns from their source
    /// files.
    pub fn reload(&mut self) -> Result<CmdResult> {
        let left = self.pair.left.path.clone();
        let right = self.pair.right.path.clone();
        if left.is_none() && right.is_none() {
            return Err(TandemError::Api("There are no files to reload".into()));
        }

        let mut result = self.open(left, right)?;
        result.add_message(CmdMessage::info("Reloaded files, unsaved edits dropped"));
        Ok(result)
    }
}
