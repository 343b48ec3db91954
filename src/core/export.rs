//! Export pipeline: label definitions + translation files → table

use super::table::{build_export_table, LabelFilter, LabelTable, LanguageMap};
use crate::error::LabelResult;
use crate::parser::{parse_custom_labels, parse_translations};
use crate::project::ProjectLayout;
use std::path::PathBuf;
use tracing::{info, warn};

/// Default file name of the exported workbook
pub const DEFAULT_EXPORT_FILE: &str = "custom-labels-export.xlsx";

/// Options of a single export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Language columns, in output order
    pub languages: Vec<String>,
    pub filter: LabelFilter,
    /// Workbook to write
    pub output: PathBuf,
}

impl ExportOptions {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            filter: LabelFilter::default(),
            output: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

/// Load one language map entry per requested language that has a
/// translation file; absent files are reported and skipped.
pub fn load_translations(project: &ProjectLayout, languages: &[String]) -> LabelResult<LanguageMap> {
    let mut map = LanguageMap::new();

    for lang in languages {
        if map.contains_language(lang) {
            continue;
        }
        let path = project.translation_path(lang);
        if path.is_file() {
            info!("translations for '{}' found. Path [{}]", lang, path.display());
            let translations = parse_translations(&path)?;
            map.add_translations(lang.as_str(), &translations);
        } else {
            warn!("translations for '{}' not found. Path [{}]", lang, path.display());
        }
    }

    Ok(map)
}

/// Build the export table for `project`
///
/// Fails before reading anything else when the label definition file is
/// missing.
pub fn build_project_table(project: &ProjectLayout, options: &ExportOptions) -> LabelResult<LabelTable> {
    let labels_path = project.require_custom_labels()?;
    info!("{} found", labels_path.display());

    let translations = load_translations(project, &options.languages)?;
    let labels = parse_custom_labels(&labels_path)?;

    Ok(build_export_table(
        &labels,
        &translations,
        &options.languages,
        &options.filter,
    ))
}
