//! Project folder layout
//!
//! A metadata project keeps label definitions and per-language translation
//! files in fixed sub-folders of its source root:
//!
//! ```text
//! <root>/labels/CustomLabels.labels
//! <root>/translations/<lang>.translation
//! ```

use crate::error::{LabelError, LabelResult};
use std::path::{Path, PathBuf};

/// Folder holding the label definition file
pub const LABELS_FOLDER: &str = "labels";

/// Folder holding per-language translation files
pub const TRANSLATIONS_FOLDER: &str = "translations";

/// Label definition file name
pub const CUSTOM_LABELS_FILE: &str = "CustomLabels.labels";

/// Extension of a translation file
pub const TRANSLATION_EXTENSION: &str = "translation";

/// Resolved paths of a metadata project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of `labels/CustomLabels.labels`
    pub fn custom_labels_path(&self) -> PathBuf {
        self.root.join(LABELS_FOLDER).join(CUSTOM_LABELS_FILE)
    }

    /// Path of `translations/<lang>.translation`
    pub fn translation_path(&self, lang: &str) -> PathBuf {
        self.root
            .join(TRANSLATIONS_FOLDER)
            .join(format!("{}.{}", lang.trim(), TRANSLATION_EXTENSION))
    }

    /// Fail unless the project root is an existing directory
    pub fn require_root(&self) -> LabelResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(LabelError::missing("Project folder", &self.root))
        }
    }

    /// Return the label definition path, failing if the file is absent
    pub fn require_custom_labels(&self) -> LabelResult<PathBuf> {
        let path = self.custom_labels_path();
        if path.is_file() {
            Ok(path)
        } else {
            Err(LabelError::missing(CUSTOM_LABELS_FILE, path))
        }
    }
}

/// Split a comma-separated language list, trimming each code and dropping
/// empty entries. Order and duplicates are kept as given.
pub fn parse_language_list(languages: &str) -> LabelResult<Vec<String>> {
    let langs: Vec<String> = languages
        .split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .collect();

    if langs.is_empty() {
        return Err(LabelError::Validation(format!(
            "No languages given in '{}'",
            languages
        )));
    }

    Ok(langs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let layout = ProjectLayout::new("/work/src");
        assert_eq!(
            layout.custom_labels_path(),
            PathBuf::from("/work/src/labels/CustomLabels.labels")
        );
        assert_eq!(
            layout.translation_path(" de "),
            PathBuf::from("/work/src/translations/de.translation")
        );
    }

    #[test]
    fn test_require_custom_labels_missing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());

        assert!(layout.require_root().is_ok());
        let err = layout.require_custom_labels().unwrap_err();
        assert!(matches!(err, LabelError::MissingFile { .. }));
        assert!(err.to_string().contains("CustomLabels.labels"));
    }

    #[test]
    fn test_require_root_missing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path().join("nope"));
        assert!(matches!(
            layout.require_root(),
            Err(LabelError::MissingFile { .. })
        ));
    }

    #[test]
    fn test_parse_language_list() {
        assert_eq!(
            parse_language_list("en_US, de,,fr ,de").unwrap(),
            vec!["en_US", "de", "fr", "de"]
        );
    }

    #[test]
    fn test_parse_language_list_empty() {
        assert!(matches!(
            parse_language_list(" , "),
            Err(LabelError::Validation(_))
        ));
    }
}
