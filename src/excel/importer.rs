//! Excel importer implementation - .xlsx → translation table

use crate::core::LabelTable;
use crate::error::{LabelError, LabelResult};
use super::extent::{read_row_extents, RowExtents};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::{debug, info};

/// Reads the first worksheet of a workbook into a [`LabelTable`]
pub struct ExcelImporter {
    path: std::path::PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first sheet as a table of strings
    pub fn import(&self) -> LabelResult<LabelTable> {
        info!("start read import file...");

        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| LabelError::Spreadsheet(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LabelError::Spreadsheet("Workbook has no worksheets".to_string()))?
            .map_err(|e| LabelError::Spreadsheet(format!("Failed to read worksheet: {}", e)))?;
        let extents = read_row_extents(&self.path)?;

        let table = Self::build_table(&range, &extents);
        info!("import file was read...");
        Ok(table)
    }

    /// Convert the first sheet to a table.
    ///
    /// The first used row is the header. Its leading non-empty cells, counted
    /// from column A, fix the column count; cells beyond it are ignored in
    /// every row and an empty header cell ends the header.
    ///
    /// A data row ends at its last physical cell, styled blanks included, so
    /// a row that really stops early stays short instead of being padded with
    /// empty text. Fully blank data rows are dropped.
    fn build_table(range: &Range<Data>, extents: &RowExtents) -> LabelTable {
        let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
            return LabelTable::default();
        };
        let last_row = extents
            .keys()
            .next_back()
            .map_or(last_row, |&row| row.max(last_row));

        let cell = |row: u32, col: u32| -> String {
            range
                .get_value((row, col))
                .map(cell_to_string)
                .unwrap_or_default()
        };

        let mut header = Vec::new();
        for col in 0.. {
            let name = cell(first_row, col);
            if name.trim().is_empty() {
                break;
            }
            header.push(name);
        }
        let columns = header.len() as u32;
        info!("columns count [{}]", columns);

        let mut rows = vec![header];
        for row in (first_row + 1)..=last_row {
            let with_value = (0..columns)
                .rev()
                .find(|&col| !cell(row, col).is_empty())
                .map_or(0, |col| col + 1);
            let physical = extents.get(&row).copied().unwrap_or(0);
            let width = physical.max(with_value).min(columns);

            let data: Vec<String> = (0..width).map(|col| cell(row, col)).collect();
            if data.iter().all(|value| value.is_empty()) {
                debug!("skipping blank row [{}]", row);
                continue;
            }
            if width < columns {
                debug!("row [{}] ends after {} cell(s)", row, width);
            }
            rows.push(data);
        }

        LabelTable::from_rows(rows)
    }
}

/// Render a cell as the text a translator sees
fn cell_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
