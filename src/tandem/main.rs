use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tandem::api::Session;
use tandem::config::TandemConfig;
use tandem::error::{Result, TandemError};
use tandem::model::Side;
use tandem::store::fs::FileStore;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_matches, print_messages, print_rows, print_stats};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TandemConfig::load(config_dir())?;

    match cli.command {
        Commands::Show {
            left,
            right,
            from,
            count,
            width,
            left_lang,
            right_lang,
        } => handle_show(&config, left, right, from, count, width, left_lang, right_lang),
        Commands::Stats { left, right, json } => handle_stats(&config, left, right, json),
        Commands::Search {
            term,
            left,
            right,
            from_row,
            from_side,
            backwards,
            no_wrap,
        } => handle_search(&config, term, left, right, from_row, from_side, backwards, no_wrap),
        Commands::Insert { index, left, right } => {
            handle_edit_op(left, right, |s| s.insert_row(index))
        }
        Commands::Delete { index, left, right } => {
            handle_edit_op(left, right, |s| s.delete_row(index))
        }
        Commands::Move {
            from,
            to,
            left,
            right,
        } => handle_edit_op(left, right, |s| s.move_row(from, to)),
        Commands::Edit {
            row,
            side,
            text,
            left,
            right,
        } => handle_edit_op(left, right, |s| s.edit_cell(row, side, &text)),
        Commands::Copy {
            side,
            out,
            left,
            right,
        } => handle_copy(left, right, side, out),
        Commands::Config { key, value } => handle_config(key, value),
    }
}

/// Config lives in the platform config dir; `TANDEM_CONFIG_DIR` overrides it
/// (used by the integration tests to stay out of the real home).
fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TANDEM_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "tandem", "tandem")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tandem"))
}

fn open_session(left: PathBuf, right: PathBuf) -> Result<Session<FileStore>> {
    let mut session = Session::new(FileStore::new());
    session.open(Some(left), Some(right))?;
    Ok(session)
}

fn column_headers(
    config: &TandemConfig,
    left_lang: Option<String>,
    right_lang: Option<String>,
) -> (String, String) {
    let left = left_lang
        .or_else(|| config.left_language.clone())
        .unwrap_or_else(|| "Left".to_string());
    let right = right_lang
        .or_else(|| config.right_language.clone())
        .unwrap_or_else(|| "Right".to_string());
    (left, right)
}

#[allow(clippy::too_many_arguments)]
fn handle_show(
    config: &TandemConfig,
    left: PathBuf,
    right: PathBuf,
    from: usize,
    count: Option<usize>,
    width: usize,
    left_lang: Option<String>,
    right_lang: Option<String>,
) -> Result<()> {
    let mut session = open_session(left, right)?;
    let (left_header, right_header) = column_headers(config, left_lang, right_lang);
    session.set_language(Side::Left, Some(left_header));
    session.set_language(Side::Right, Some(right_header));

    let count = count.unwrap_or_else(|| session.pair().len());
    let result = session.rows(from, count)?;
    let left_header = header_for(&session, Side::Left);
    let right_header = header_for(&session, Side::Right);

    print_rows(&result.rows, &left_header, &right_header, width);
    Ok(())
}

fn header_for(session: &Session<FileStore>, side: Side) -> String {
    session
        .pair()
        .column(side)
        .language
        .clone()
        .unwrap_or_else(|| side.to_string())
}

fn handle_stats(config: &TandemConfig, left: PathBuf, right: PathBuf, json: bool) -> Result<()> {
    let session = open_session(left, right)?;
    let result = session.stats()?;
    let stats = result
        .stats
        .ok_or_else(|| TandemError::Api("Stats command returned no snapshot".into()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        let (left_header, right_header) = column_headers(config, None, None);
        print_stats(&stats, &left_header, &right_header);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_search(
    config: &TandemConfig,
    term: String,
    left: PathBuf,
    right: PathBuf,
    from_row: Option<usize>,
    from_side: Side,
    backwards: bool,
    no_wrap: bool,
) -> Result<()> {
    let session = open_session(left, right)?;
    let wrap = !no_wrap && config.search_wrap;

    // A cursor makes this a single next/previous find; otherwise list
    // every match, like the highlight-all view of the original table.
    let result = if from_row.is_some() || backwards {
        let start = from_row.unwrap_or(0);
        if backwards {
            session.find_previous(&term, start, from_side, wrap)?
        } else {
            session.find(&term, start, from_side, wrap)?
        }
    } else {
        session.find_all(&term)?
    };

    let with_text: Vec<_> = result
        .matches
        .iter()
        .map(|m| {
            let text = session
                .pair()
                .line(m.side, m.row)
                .map(|l| l.text.clone())
                .unwrap_or_default();
            (*m, text)
        })
        .collect();

    print_matches(&with_text);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit_op<F>(left: PathBuf, right: PathBuf, op: F) -> Result<()>
where
    F: FnOnce(&mut Session<FileStore>) -> Result<tandem::commands::CmdResult>,
{
    let mut session = open_session(left, right)?;
    let result = op(&mut session)?;
    print_messages(&result.messages);

    let saved = session.save()?;
    print_messages(&saved.messages);
    Ok(())
}

fn handle_copy(left: PathBuf, right: PathBuf, side: Side, out: PathBuf) -> Result<()> {
    let mut session = open_session(left, right)?;
    let result = session.save_as(side, out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir();
    let mut config = TandemConfig::load(&dir)?;

    let Some(key) = key else {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    };

    match (key.as_str(), value) {
        ("left-lang", None) => println!("{}", config.left_language.unwrap_or_default()),
        ("right-lang", None) => println!("{}", config.right_language.unwrap_or_default()),
        ("search-wrap", None) => println!("{}", config.search_wrap),
        ("left-lang", Some(v)) => {
            config.left_language = Some(v);
            config.save(&dir)?;
        }
        ("right-lang", Some(v)) => {
            config.right_language = Some(v);
            config.save(&dir)?;
        }
        ("search-wrap", Some(v)) => {
            config.search_wrap = v.parse().map_err(|_| {
                TandemError::Api(format!("Invalid boolean '{}' for search-wrap", v))
            })?;
            config.save(&dir)?;
        }
        (other, _) => {
            return Err(TandemError::Api(format!(
                "Unknown config key '{}' (expected left-lang, right-lang or search-wrap)",
                other
            )))
        }
    }
    Ok(())
}
