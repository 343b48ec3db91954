//! Fixed-width text rendering of a [`LabelTable`] for log output

use super::table::LabelTable;

/// Width of every rendered column
pub const COLUMN_WIDTH: usize = 30;

const ELLIPSIS: &str = "...";

/// Render `table` as a bordered grid, or `None` when it has no rows.
///
/// Every column is [`COLUMN_WIDTH`] characters wide; longer cells are cut to
/// `COLUMN_WIDTH - 3` characters followed by `...`. The column count comes
/// from the header row.
pub fn render_table(table: &LabelTable) -> Option<String> {
    let header = table.header()?;
    let columns = header.len();

    let hline = format!(
        "+{}\n",
        format!(" {} +", "-".repeat(COLUMN_WIDTH)).repeat(columns)
    );

    let mut out = String::new();
    for (idx, row) in table.rows().iter().enumerate() {
        if idx <= 1 {
            out.push_str(&hline);
        }
        out.push('|');
        for col in 0..columns {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", truncate(cell), width = COLUMN_WIDTH));
        }
        out.push('\n');
    }
    out.push_str(&hline);

    Some(out)
}

fn truncate(cell: &str) -> String {
    let limit = COLUMN_WIDTH - ELLIPSIS.len();
    if cell.chars().count() > limit {
        let mut cut: String = cell.chars().take(limit).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        cell.to_string()
    }
}
