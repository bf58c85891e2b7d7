use crate::model::DocumentPair;

/// One display row of the aligned table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub index: usize,
    pub left: String,
    pub right: String,
    /// True when either cell has unsaved edits.
    pub modified: bool,
}

/// Rows `start..start + count`, clamped to the document length. This is the
/// virtualization seam: display layers page through the pair instead of
/// materializing every row at once.
pub fn range(pair: &DocumentPair, start: usize, count: usize) -> Vec<AlignedRow> {
    let end = start.saturating_add(count).min(pair.len());
    if start >= end {
        return Vec::new();
    }

    (start..end)
        .map(|i| {
            let left = &pair.left.lines[i];
            let right = &pair.right.lines[i];
            AlignedRow {
                index: i,
                left: left.text.clone(),
                right: right.text.clone(),
                modified: left.modified || right.modified,
            }
        })
        .collect()
}
