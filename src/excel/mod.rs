//! Excel import/export of translation tables
//!
//! - Export: table → single-sheet .xlsx, every cell plain wrapped text
//! - Import: first sheet of an .xlsx → table of strings, each row as wide as
//!   its physical cells

mod exporter;
mod extent;
mod importer;

pub use exporter::{ExcelExporter, COLUMN_WIDTH, SHEET_NAME};
pub use importer::ExcelImporter;
