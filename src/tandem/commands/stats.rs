use crate::model::{Column, ColumnStats, DocumentPair, StatsSnapshot};

fn column_stats(column: &Column) -> ColumnStats {
    ColumnStats {
        line_count: column.len(),
        word_count: column
            .lines
            .iter()
            .map(|l| l.text.split_whitespace().count())
            .sum(),
        modified_count: column.lines.iter().filter(|l| l.modified).count(),
    }
}

/// Pure function of the current pair state; recomputed on every call.
pub fn compute(pair: &DocumentPair) -> StatsSnapshot {
    StatsSnapshot {
        left: column_stats(&pair.left),
        right: column_stats(&pair.right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::edit;
    use crate::model::Side;

    fn pair() -> DocumentPair {
        DocumentPair::new(
            Column::from_texts(vec!["a b".into(), "c".into()]),
            Column::from_texts(vec!["d".into()]),
        )
    }

    #[test]
    fn counts_lines_words_and_modifications() {
        let snapshot = compute(&pair());

        assert_eq!(snapshot.left.line_count, 2);
        assert_eq!(snapshot.left.word_count, 3);
        assert_eq!(snapshot.left.modified_count, 0);

        // right was padded to length 2 at construction
        assert_eq!(snapshot.right.line_count, 2);
        assert_eq!(snapshot.right.word_count, 1);
        assert_eq!(snapshot.right.modified_count, 0);
    }

    #[test]
    fn is_idempotent_without_intervening_mutation() {
        let p = pair();
        assert_eq!(compute(&p), compute(&p));
    }

    #[test]
    fn counts_modified_lines_per_side() {
        let mut p = pair();
        edit::cell(&mut p, 0, Side::Left, "edited").unwrap();
        edit::cell(&mut p, 1, Side::Left, "also edited").unwrap();

        let snapshot = compute(&p);
        assert_eq!(snapshot.left.modified_count, 2);
        assert_eq!(snapshot.right.modified_count, 0);
    }

    #[test]
    fn whitespace_runs_delimit_single_tokens() {
        let p = DocumentPair::new(
            Column::from_texts(vec!["  two   words  ".into()]),
            Column::from_texts(vec!["".into()]),
        );
        let snapshot = compute(&p);
        assert_eq!(snapshot.left.word_count, 2);
        assert_eq!(snapshot.right.word_count, 0);
    }
}
