use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tandem::model::Side;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tandem", bin_name = "tandem", version = get_version())]
#[command(
    about = "Side-by-side viewer and line editor for parallel text files",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the aligned pair as a two-column table
    #[command(alias = "cat")]
    Show {
        left: PathBuf,
        right: PathBuf,

        /// First row to show (zero-based)
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Number of rows to show (default: all)
        #[arg(long)]
        count: Option<usize>,

        /// Total table width in terminal columns
        #[arg(long, default_value_t = 100)]
        width: usize,

        /// Header label for the left column
        #[arg(long)]
        left_lang: Option<String>,

        /// Header label for the right column
        #[arg(long)]
        right_lang: Option<String>,
    },

    /// Line, word and modified-line counts for both files
    Stats {
        left: PathBuf,
        right: PathBuf,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search both files for a case-insensitive substring
    Search {
        term: String,
        left: PathBuf,
        right: PathBuf,

        /// Report only the first match at or after this row
        #[arg(long)]
        from_row: Option<usize>,

        /// Column to start scanning from
        #[arg(long, default_value = "left")]
        from_side: Side,

        /// Scan backwards from the start position
        #[arg(long)]
        backwards: bool,

        /// Stop at the end instead of wrapping around
        #[arg(long)]
        no_wrap: bool,
    },

    /// Insert an empty row into both files and save them back
    Insert {
        index: usize,
        left: PathBuf,
        right: PathBuf,
    },

    /// Delete a row from both files and save them back
    #[command(alias = "rm")]
    Delete {
        index: usize,
        left: PathBuf,
        right: PathBuf,
    },

    /// Move a row, both files in lockstep, and save them back
    Move {
        from: usize,
        to: usize,
        left: PathBuf,
        right: PathBuf,
    },

    /// Replace the text of one cell and save both files back
    Edit {
        row: usize,
        side: Side,
        text: String,
        left: PathBuf,
        right: PathBuf,
    },

    /// Write one column to a new file (save as)
    Copy {
        side: Side,
        out: PathBuf,
        left: PathBuf,
        right: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (left-lang, right-lang, search-wrap)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
