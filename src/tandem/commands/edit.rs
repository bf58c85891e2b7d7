use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TandemError};
use crate::model::{DocumentPair, Side};

/// Replace the text of one cell. Only that side's line is marked modified;
/// its counterpart is untouched. This is the one asymmetric edit: a
/// translator edits one side at a time, while row operations always act on
/// both columns.
pub fn cell(
    pair: &mut DocumentPair,
    row: usize,
    side: Side,
    text: impl Into<String>,
) -> Result<CmdResult> {
    let len = pair.len();
    let line = pair
        .column_mut(side)
        .lines
        .get_mut(row)
        .ok_or(TandemError::IndexOutOfRange { index: row, len })?;

    line.text = text.into();
    line.modified = true;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {} cell at row {}",
        side, row
    )));
    Ok(result)
}
