//! Core transformation logic: table building, merging and the two pipelines

pub mod export;
pub mod import;
pub mod merge;
pub mod printer;
pub mod table;

pub use export::{build_project_table, ExportOptions, DEFAULT_EXPORT_FILE};
pub use import::{import_spreadsheet, ImportOptions, ImportReport};
pub use merge::{apply_translations, language_map_from_table, LabelChange};
pub use printer::render_table;
pub use table::{build_export_table, LabelFilter, LabelTable, LanguageMap};
