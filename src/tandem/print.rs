use colored::Colorize;
use tandem::commands::{AlignedRow, CmdMessage, Match, MessageLevel};
use tandem::model::StatsSnapshot;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = " │ ";
const MIN_CELL_WIDTH: usize = 8;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Render aligned rows as a numbered two-column table. Modified rows are
/// shown in yellow, mirroring the dirty-row highlight of a table widget.
pub(crate) fn print_rows(
    rows: &[AlignedRow],
    left_header: &str,
    right_header: &str,
    width: usize,
) {
    if rows.is_empty() {
        println!("No rows to show.");
        return;
    }

    let last_index = rows.last().map(|r| r.index).unwrap_or(0);
    let idx_width = (last_index + 1).to_string().len().max(3);
    let fixed = idx_width + SEPARATOR.width() * 2;
    let cell_width = width
        .saturating_sub(fixed)
        .div_euclid(2)
        .max(MIN_CELL_WIDTH);

    println!(
        "{:>idx_width$}{}{}{}{}",
        "#",
        SEPARATOR,
        pad_to_width(left_header, cell_width).bold(),
        SEPARATOR,
        pad_to_width(right_header, cell_width).bold(),
    );

    for row in rows {
        let idx = format!("{:>idx_width$}", row.index + 1);
        let left = pad_to_width(&row.left, cell_width);
        let right = pad_to_width(&row.right, cell_width);

        if row.modified {
            println!(
                "{}{}{}{}{}",
                idx.dimmed(),
                SEPARATOR,
                left.yellow(),
                SEPARATOR,
                right.yellow()
            );
        } else {
            println!("{}{}{}{}{}", idx.dimmed(), SEPARATOR, left, SEPARATOR, right);
        }
    }
}

pub(crate) fn print_stats(stats: &StatsSnapshot, left_header: &str, right_header: &str) {
    let label_width = left_header.width().max(right_header.width()).max(5);
    println!(
        "{:<label_width$}  {:>8}  {:>8}  {:>8}",
        "",
        "lines".bold(),
        "words".bold(),
        "modified".bold()
    );
    for (header, col) in [(left_header, &stats.left), (right_header, &stats.right)] {
        println!(
            "{:<label_width$}  {:>8}  {:>8}  {:>8}",
            header, col.line_count, col.word_count, col.modified_count
        );
    }
}

/// One line per match: row number, side, and the matching cell's text.
pub(crate) fn print_matches(matches: &[(Match, String)]) {
    for (m, text) in matches {
        println!(
            "{:>4} {:<5} {}",
            (m.row + 1).to_string().dimmed(),
            m.side.to_string().yellow(),
            text
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
