//! Excel exporter implementation - translation table → .xlsx

use crate::core::LabelTable;
use crate::error::{LabelError, LabelResult};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Name of the single worksheet written on export
pub const SHEET_NAME: &str = "custom labels";

/// Width (in characters) applied to every column
pub const COLUMN_WIDTH: f64 = 39.0;

/// Writes a [`LabelTable`] to a single-sheet workbook.
///
/// Every cell is written as plain text with word wrap enabled, so keys and
/// translations that look like numbers or dates keep their exact spelling.
/// Empty cells are written as wrapped blanks rather than left out.
pub struct ExcelExporter<'a> {
    table: &'a LabelTable,
}

impl<'a> ExcelExporter<'a> {
    pub fn new(table: &'a LabelTable) -> Self {
        Self { table }
    }

    /// Export the table to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> LabelResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| LabelError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let wrap = Format::new().set_text_wrap();

        let columns = self.table.rows().iter().map(Vec::len).max().unwrap_or(0);
        for col in 0..columns {
            worksheet
                .set_column_width(col as u16, COLUMN_WIDTH)
                .map_err(|e| LabelError::Export(format!("Failed to set column width: {}", e)))?;
        }

        for (row_idx, row) in self.table.rows().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (row_num, col_num) = (row_idx as u32, col_idx as u16);
                // Empty text becomes a styled blank, which still occupies the cell
                let written = if cell.is_empty() {
                    worksheet.write_blank(row_num, col_num, &wrap)
                } else {
                    worksheet.write_string_with_format(row_num, col_num, cell, &wrap)
                };
                written.map_err(|e| {
                    LabelError::Export(format!(
                        "Failed to write cell ({}, {}): {}",
                        row_idx, col_idx, e
                    ))
                })?;
            }
        }

        workbook
            .save(output_path)
            .map_err(|e| LabelError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }
}
