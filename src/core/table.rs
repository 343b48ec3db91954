//! Translation table and language maps
//!
//! A [`LabelTable`] is the spreadsheet-shaped view of the labels: row 0 is the
//! header `["Translation key", "Description", lang1, lang2, ...]` and every
//! following row holds one label key, its description and one cell per
//! language column.

use crate::types::{CustomLabel, CustomLabels, Translations};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Header of the key column
pub const KEY_HEADER: &str = "Translation key";

/// Header of the description column
pub const DESCRIPTION_HEADER: &str = "Description";

/// Number of leading columns that are not languages (key, description)
pub const FIXED_COLUMNS: usize = 2;

/// Ordered grid of strings; row 0 is the header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelTable {
    rows: Vec<Vec<String>>,
}

impl LabelTable {
    /// Create a table holding only the header row for `languages`
    pub fn with_languages<S: AsRef<str>>(languages: &[S]) -> Self {
        let mut header = vec![KEY_HEADER.to_string(), DESCRIPTION_HEADER.to_string()];
        header.extend(languages.iter().map(|lang| lang.as_ref().to_string()));
        Self { rows: vec![header] }
    }

    /// Wrap raw rows (row 0 taken as the header)
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// All rows, header included
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Language code → (label key → translated text)
///
/// Languages keep the order they were inserted in, which is the order they
/// were requested on export or appear in the header on import.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageMap {
    languages: IndexMap<String, HashMap<String, String>>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language, keeping any entries already present
    pub fn add_language(&mut self, lang: impl Into<String>) -> &mut HashMap<String, String> {
        self.languages.entry(lang.into()).or_default()
    }

    /// Register a language from a translation file's `customLabels` entries
    pub fn add_translations(&mut self, lang: impl Into<String>, translations: &Translations) {
        let entries = self.add_language(lang);
        for entry in &translations.custom_labels {
            entries.insert(entry.name.clone(), entry.label.clone());
        }
    }

    pub fn insert(&mut self, lang: &str, key: impl Into<String>, text: impl Into<String>) {
        self.add_language(lang).insert(key.into(), text.into());
    }

    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.languages
            .get(lang)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn contains_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Language codes in insertion order
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Row filters applied while building an export table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    /// Keep only labels whose category equals this exactly
    pub category: Option<String>,
    /// Keep only labels whose key starts with this
    pub prefix: Option<String>,
}

impl LabelFilter {
    pub fn matches(&self, label: &CustomLabel) -> bool {
        if let Some(category) = &self.category {
            if label.categories.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(prefix) = &self.prefix {
            if !label.full_name.starts_with(prefix.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Build the export table: one row per label that passes `filter`, one
/// language column per entry of `languages` (duplicates kept).
///
/// A label's own language column shows its current value; every other
/// column is looked up in `translations`, falling back to an empty cell.
pub fn build_export_table<S: AsRef<str>>(
    labels: &CustomLabels,
    translations: &LanguageMap,
    languages: &[S],
    filter: &LabelFilter,
) -> LabelTable {
    let mut table = LabelTable::with_languages(languages);

    for label in labels.labels.iter().filter(|label| filter.matches(label)) {
        let mut row = Vec::with_capacity(FIXED_COLUMNS + languages.len());
        row.push(label.full_name.clone());
        row.push(label.short_description.clone());

        for lang in languages {
            let lang = lang.as_ref();
            let cell = if label.is_language(lang) {
                label.value.as_str()
            } else {
                translations.get(lang, &label.full_name).unwrap_or("")
            };
            row.push(cell.to_string());
        }

        table.push_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranslationEntry;
    use pretty_assertions::assert_eq;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn sample_labels() -> CustomLabels {
        CustomLabels::new(vec![
            CustomLabel::new("K1", "Desc1", "Hola", "es").with_category("CatA"),
            CustomLabel::new("K2", "Desc2", "Hi", "en").with_category("CatB"),
        ])
    }

    fn english_translations() -> LanguageMap {
        let mut map = LanguageMap::new();
        map.add_translations(
            "en",
            &Translations {
                custom_labels: vec![TranslationEntry::new("K1", "Hello")],
            },
        );
        map
    }

    #[test]
    fn test_reference_scenario() {
        let table = build_export_table(
            &sample_labels(),
            &english_translations(),
            &["en"],
            &LabelFilter::default(),
        );

        assert_eq!(
            table.into_rows(),
            rows(&[
                &["Translation key", "Description", "en"],
                &["K1", "Desc1", "Hello"],
                &["K2", "Desc2", "Hi"],
            ])
        );
    }

    #[test]
    fn test_own_language_value_wins_over_translation() {
        let mut translations = english_translations();
        translations.insert("en", "K2", "Translated Hi");

        let table = build_export_table(
            &sample_labels(),
            &translations,
            &["en"],
            &LabelFilter::default(),
        );

        assert_eq!(table.data_rows()[1][2], "Hi");
    }

    #[test]
    fn test_missing_translation_is_empty_cell() {
        let table = build_export_table(
            &sample_labels(),
            &LanguageMap::new(),
            &["de", "es"],
            &LabelFilter::default(),
        );

        assert_eq!(
            table.into_rows(),
            rows(&[
                &["Translation key", "Description", "de", "es"],
                &["K1", "Desc1", "", "Hola"],
                &["K2", "Desc2", "", ""],
            ])
        );
    }

    #[test]
    fn test_columns_follow_request_order_with_duplicates() {
        let table = build_export_table(
            &sample_labels(),
            &english_translations(),
            &["es", "en", "es"],
            &LabelFilter::default(),
        );

        assert_eq!(
            table.header().unwrap(),
            ["Translation key", "Description", "es", "en", "es"]
        );
        assert_eq!(table.data_rows()[0], ["K1", "Desc1", "Hola", "Hello", "Hola"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut labels = sample_labels();
        labels
            .labels
            .push(CustomLabel::new("K3", "Desc3", "x", "en").with_category("CatA,CatB"));
        let filter = LabelFilter {
            category: Some("CatA".to_string()),
            prefix: None,
        };

        let table = build_export_table(&labels, &LanguageMap::new(), &["en"], &filter);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.data_rows()[0][0], "K1");
    }

    #[test]
    fn test_prefix_filter() {
        let labels = CustomLabels::new(vec![
            CustomLabel::new("App_Title", "", "Title", "en"),
            CustomLabel::new("Other_Title", "", "Other", "en"),
            CustomLabel::new("App_Footer", "", "Footer", "en"),
        ]);
        let filter = LabelFilter {
            category: None,
            prefix: Some("App_".to_string()),
        };

        let table = build_export_table(&labels, &LanguageMap::new(), &["en"], &filter);

        let keys: Vec<&str> = table.data_rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(keys, vec!["App_Title", "App_Footer"]);
    }

    #[test]
    fn test_header_present_without_rows() {
        let filter = LabelFilter {
            category: Some("Nothing".to_string()),
            prefix: None,
        };
        let table = build_export_table(&sample_labels(), &LanguageMap::new(), &["en"], &filter);

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_language_map_keeps_insertion_order() {
        let mut map = LanguageMap::new();
        map.add_language("fr");
        map.insert("de", "K", "v");
        map.add_language("en");
        map.add_language("fr");

        let codes: Vec<&str> = map.language_codes().collect();
        assert_eq!(codes, vec!["fr", "de", "en"]);
        assert_eq!(map.get("de", "K"), Some("v"));
        assert_eq!(map.get("fr", "K"), None);
        assert!(map.contains_language("en"));
    }

    #[test]
    fn test_empty_table_accessors() {
        let table = LabelTable::default();
        assert!(table.is_empty());
        assert!(table.header().is_none());
        assert!(table.data_rows().is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
