//! Import pipeline: edited workbook → label definition file

use super::merge::{apply_translations, language_map_from_table, LabelChange};
use super::printer::render_table;
use crate::error::{LabelError, LabelResult};
use crate::excel::ExcelImporter;
use crate::parser::parse_custom_labels;
use crate::project::{ProjectLayout, CUSTOM_LABELS_FILE};
use crate::writer::write_custom_labels;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options of a single import run
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Compute and log changes without rewriting the label file
    pub dry_run: bool,
}

/// Outcome of an import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Label file that was (or in a dry run, would have been) rewritten
    pub labels_path: PathBuf,
    /// Language columns recognised in the workbook header
    pub languages: Vec<String>,
    /// Data rows read from the workbook
    pub rows: usize,
    pub changes: Vec<LabelChange>,
    pub written: bool,
}

/// Merge the workbook at `spreadsheet` into the project's label file
///
/// The workbook, the project folder and the label file are all checked
/// before anything is read or written.
pub fn import_spreadsheet(
    project: &ProjectLayout,
    spreadsheet: &Path,
    options: &ImportOptions,
) -> LabelResult<ImportReport> {
    if !spreadsheet.is_file() {
        return Err(LabelError::missing("Import file", spreadsheet));
    }
    project.require_root()?;
    let labels_path = project.require_custom_labels()?;

    let table = ExcelImporter::new(spreadsheet).import()?;
    if let Some(rendered) = render_table(&table) {
        debug!("\n Print table \n{}", rendered);
    }

    let map = language_map_from_table(&table)?;

    info!("{} found", labels_path.display());
    info!("{} changes", CUSTOM_LABELS_FILE);
    let mut labels = parse_custom_labels(&labels_path)?;
    let changes = apply_translations(&mut labels, &map);

    let written = !options.dry_run;
    if written {
        write_custom_labels(&labels_path, &labels)?;
        info!("{} saved...", CUSTOM_LABELS_FILE);
    } else {
        info!("dry run, {} left unchanged", CUSTOM_LABELS_FILE);
    }

    Ok(ImportReport {
        labels_path,
        languages: map.language_codes().map(str::to_string).collect(),
        rows: table.row_count(),
        changes,
        written,
    })
}
