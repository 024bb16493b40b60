//! Table pairing and cell-grid reconciliation

use report_types::{AlignmentQuality, CellChange, DiffTable, DiffType, Table};

use crate::pairing::pair_by_key;

/// Pair tables by title (falling back to id) and diff each pair
///
/// Unpaired tables are reported whole, without cell detail. Paired tables
/// whose grids agree cell for cell are unchanged and omitted.
pub fn diff_tables(tables_a: &[Table], tables_b: &[Table]) -> Vec<DiffTable> {
    let pairing = pair_by_key(tables_a, tables_b, Table::match_key);
    let mut diffs = Vec::new();

    for (idx_a, idx_b) in pairing.pairs {
        let table_a = &tables_a[idx_a];
        match idx_b {
            Some(idx_b) => {
                let diff = diff_table(table_a, &tables_b[idx_b]);
                if !diff.cell_changes.is_empty()
                    || diff.alignment_quality != AlignmentQuality::Perfect
                {
                    diffs.push(diff);
                }
            }
            None => diffs.push(whole_table(table_a, DiffType::Deleted)),
        }
    }

    for idx_b in pairing.unmatched_b {
        diffs.push(whole_table(&tables_b[idx_b], DiffType::Added));
    }

    diffs
}

/// A table that exists on one side only
pub fn whole_table(table: &Table, kind: DiffType) -> DiffTable {
    DiffTable {
        table_id: table.id.clone(),
        kind,
        alignment_quality: AlignmentQuality::Perfect,
        cell_changes: Vec::new(),
    }
}

/// Compare two matched tables on a unified `max_rows x max_cols` grid
pub fn diff_table(table_a: &Table, table_b: &Table) -> DiffTable {
    let alignment_quality =
        if table_a.rows.len() == table_b.rows.len() && table_a.columns == table_b.columns {
            AlignmentQuality::Perfect
        } else {
            AlignmentQuality::Partial
        };

    let max_rows = table_a.rows.len().max(table_b.rows.len());
    let max_cols = table_a
        .columns
        .max(table_b.columns)
        .max(table_a.widest_row())
        .max(table_b.widest_row());

    let mut cell_changes = Vec::new();
    for row in 0..max_rows {
        let row_label = first_label(
            table_a.rows.get(row).and_then(|r| r.row_label.as_deref()),
            table_b.rows.get(row).and_then(|r| r.row_label.as_deref()),
        );

        for col in 0..max_cols {
            let cell_a = table_a.cell(row, col);
            let cell_b = table_b.cell(row, col);

            let (kind, before, after) = match (cell_a, cell_b) {
                (None, None) => continue,
                (None, Some(b)) => (DiffType::Added, None, Some(b.content.clone())),
                (Some(a), None) => (DiffType::Deleted, Some(a.content.clone()), None),
                (Some(a), Some(b)) if a.content != b.content => (
                    DiffType::Modified,
                    Some(a.content.clone()),
                    Some(b.content.clone()),
                ),
                (Some(_), Some(_)) => continue,
            };

            cell_changes.push(CellChange {
                row_index: row,
                col_index: col,
                row_label: row_label.clone(),
                col_name: first_label(
                    cell_a.and_then(|c| c.col_name.as_deref()),
                    cell_b.and_then(|c| c.col_name.as_deref()),
                ),
                kind,
                before,
                after,
            });
        }
    }

    tracing::debug!(
        table_id = %table_a.id,
        changes = cell_changes.len(),
        ?alignment_quality,
        "diffed table"
    );

    DiffTable {
        table_id: table_a.id.clone(),
        kind: DiffType::Modified,
        alignment_quality,
        cell_changes,
    }
}

fn first_label(a: Option<&str>, b: Option<&str>) -> Option<String> {
    a.filter(|s| !s.is_empty())
        .or_else(|| b.filter(|s| !s.is_empty()))
        .map(str::to_string)
}
