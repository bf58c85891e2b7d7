use crate::model::StatsSnapshot;

pub mod edit;
pub mod rows;
pub mod search;
pub mod stats;
pub mod view;

pub use search::Match;
pub use view::AlignedRow;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of an operation: typed payloads for the UI to render,
/// plus human-readable messages. Which payload is populated depends on the
/// operation.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub rows: Vec<AlignedRow>,
    pub matches: Vec<Match>,
    pub stats: Option<StatsSnapshot>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<AlignedRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_matches(mut self, matches: Vec<Match>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_stats(mut self, stats: StatsSnapshot) -> Self {
        self.stats = Some(stats);
        self
    }
}
