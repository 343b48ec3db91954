//! Import merge: spreadsheet table → language map → label definitions

use super::table::{LabelTable, LanguageMap, FIXED_COLUMNS};
use crate::error::{LabelError, LabelResult};
use crate::types::CustomLabels;
use tracing::{debug, info, warn};

/// A label value rewritten by an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChange {
    pub key: String,
    pub language: String,
    pub old_value: String,
    pub new_value: String,
}

/// Reshape an imported table into language → (key → text)
///
/// Language columns start at index 2 and keep header order. A header with
/// fewer than three cells cannot carry any language and is rejected. Data
/// rows shorter than `2 + language columns` are skipped with a warning.
pub fn language_map_from_table(table: &LabelTable) -> LabelResult<LanguageMap> {
    let header = table
        .header()
        .ok_or_else(|| LabelError::Shape("spreadsheet has no header row".to_string()))?;

    if header.len() < FIXED_COLUMNS + 1 {
        return Err(LabelError::Shape(format!(
            "header needs a key, a description and at least one language column, found {} column(s)",
            header.len()
        )));
    }

    let mut map = LanguageMap::new();
    let mut columns: Vec<(usize, &str)> = Vec::new();
    for (idx, lang) in header.iter().enumerate().skip(FIXED_COLUMNS) {
        if lang.trim().is_empty() {
            continue;
        }
        info!("language found [{}]", lang);
        map.add_language(lang.as_str());
        columns.push((idx, lang.as_str()));
    }

    for (row_idx, row) in table.data_rows().iter().enumerate() {
        if row.len() < FIXED_COLUMNS + columns.len() {
            // Report the sheet row number (header is row 0)
            warn!("invalid row [{}]", row_idx + 1);
            continue;
        }

        let key = &row[0];
        for &(col, lang) in &columns {
            if let Some(text) = row.get(col) {
                map.insert(lang, key.as_str(), text.as_str());
            }
        }
    }

    Ok(map)
}

/// Overwrite label values from `map` in place
///
/// Only labels whose own language is a language of the map and whose key is
/// present under it are considered; the value is replaced when it differs
/// from the imported text. Labels without a language are left alone.
pub fn apply_translations(labels: &mut CustomLabels, map: &LanguageMap) -> Vec<LabelChange> {
    let mut changes = Vec::new();

    for label in &mut labels.labels {
        let Some(lang) = label.language.as_deref() else {
            continue;
        };
        let Some(new_value) = map.get(lang, &label.full_name) else {
            continue;
        };

        debug!(
            "key [{}], old value [{}], new value [{}]",
            label.full_name, label.value, new_value
        );
        if label.value == new_value {
            continue;
        }

        info!(
            "key [{}], old value [{}], new value [{}]",
            label.full_name, label.value, new_value
        );
        changes.push(LabelChange {
            key: label.full_name.clone(),
            language: lang.to_string(),
            old_value: std::mem::replace(&mut label.value, new_value.to_string()),
            new_value: new_value.to_string(),
        });
    }

    changes
}
