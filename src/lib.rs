//! Label Forge - custom label translations between XML metadata and Excel
//!
//! This library converts a project's custom label metadata into a
//! spreadsheet translators can edit, and merges the edited spreadsheet back
//! into the metadata.
//!
//! # Features
//!
//! - Export label keys, descriptions and translations to a single-sheet .xlsx
//! - Filter exported labels by exact category or key prefix
//! - Import an edited workbook, overwriting only changed label values
//! - Lossless XML round trip of the label definition file
//!
//! # Example
//!
//! ```no_run
//! use label_forge::core::{build_project_table, ExportOptions};
//! use label_forge::excel::ExcelExporter;
//! use label_forge::project::ProjectLayout;
//!
//! let project = ProjectLayout::new("force-app/main/default");
//! let options = ExportOptions::new(vec!["en_US".to_string(), "de".to_string()]);
//!
//! let table = build_project_table(&project, &options)?;
//! println!("Rows: {}", table.row_count());
//!
//! ExcelExporter::new(&table).export(&options.output)?;
//! # Ok::<(), label_forge::error::LabelError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod project;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{LabelError, LabelResult};
pub use types::{CustomLabel, CustomLabels, TranslationEntry, Translations};
