use crate::model::{DocumentPair, Side};

/// A matching cell: row index plus which column it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub side: Side,
}

// Cells are traversed in row-major order, left before right within a row,
// so cell position = row * 2 + side offset.
fn position(row: usize, side: Side) -> usize {
    row * 2
        + match side {
            Side::Left => 0,
            Side::Right => 1,
        }
}

fn match_at(pos: usize) -> Match {
    Match {
        row: pos / 2,
        side: if pos % 2 == 0 { Side::Left } else { Side::Right },
    }
}

fn cell_contains(pair: &DocumentPair, pos: usize, query_lower: &str) -> bool {
    let m = match_at(pos);
    pair.line(m.side, m.row)
        .map(|line| line.text.to_lowercase().contains(query_lower))
        .unwrap_or(false)
}

/// Case-insensitive substring search, scanning forward from
/// `(start_row, start_side)` inclusive. With `wrap`, the scan continues from
/// row 0 and stops after revisiting the start position. Returns `None` when
/// nothing matches—a normal outcome, not an error.
pub fn find(
    pair: &DocumentPair,
    query: &str,
    start_row: usize,
    start_side: Side,
    wrap: bool,
) -> Option<Match> {
    let total = pair.len() * 2;
    if total == 0 || query.is_empty() {
        return None;
    }

    let query_lower = query.to_lowercase();
    let start = position(start_row, start_side).min(total);
    let span = if wrap { total } else { total - start };

    (0..span)
        .map(|offset| (start + offset) % total)
        .find(|&pos| cell_contains(pair, pos, &query_lower))
        .map(match_at)
}

/// Same traversal as [`find`], in reverse order.
pub fn find_previous(
    pair: &DocumentPair,
    query: &str,
    start_row: usize,
    start_side: Side,
    wrap: bool,
) -> Option<Match> {
    let total = pair.len() * 2;
    if total == 0 || query.is_empty() {
        return None;
    }

    let query_lower = query.to_lowercase();
    let start = position(start_row, start_side).min(total - 1);
    let span = if wrap { total } else { start + 1 };

    (0..span)
        .map(|offset| (start + total - offset) % total)
        .find(|&pos| cell_contains(pair, pos, &query_lower))
        .map(match_at)
}

/// Every matching cell in traversal order. Backs the "highlight all matches"
/// view.
pub fn find_all(pair: &DocumentPair, query: &str) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    (0..pair.len() * 2)
        .filter(|&pos| cell_contains(pair, pos, &query_lower))
        .map(match_at)
        .collect()
}
