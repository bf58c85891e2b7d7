use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TandemError};
use crate::model::{DocumentPair, Line};

/// Insert an empty row into both columns at `index` (`0 ≤ index ≤ len`).
/// The new lines start clean.
pub fn insert(pair: &mut DocumentPair, index: usize) -> Result<CmdResult> {
    let len = pair.len();
    if index > len {
        return Err(TandemError::IndexOutOfRange { index, len });
    }

    pair.left.lines.insert(index, Line::empty());
    pair.right.lines.insert(index, Line::empty());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Inserted empty row at {}",
        index
    )));
    Ok(result)
}

/// Remove the row at `index` from both columns.
pub fn delete(pair: &mut DocumentPair, index: usize) -> Result<CmdResult> {
    let len = pair.len();
    if len == 0 {
        return Err(TandemError::EmptyDocument);
    }
    if index >= len {
        return Err(TandemError::IndexOutOfRange { index, len });
    }

    pair.left.lines.remove(index);
    pair.right.lines.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted row {}", index)));
    Ok(result)
}

/// Move the row at `from` to `to`, both columns in lockstep. `to` is
/// interpreted after removal (standard splice semantics). The moved row is
/// marked modified on both sides.
pub fn move_to(pair: &mut DocumentPair, from: usize, to: usize) -> Result<CmdResult> {
    let len = pair.len();
    if len == 0 {
        return Err(TandemError::EmptyDocument);
    }
    if from >= len {
        return Err(TandemError::IndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(TandemError::IndexOutOfRange { index: to, len });
    }

    let mut left = pair.left.lines.remove(from);
    let mut right = pair.right.lines.remove(from);
    left.modified = true;
    right.modified = true;
    pair.left.lines.insert(to, left);
    pair.right.lines.insert(to, right);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved row {} to {}",
        from, to
    )));
    Ok(result)
}
