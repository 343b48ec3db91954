use serde::{Deserialize, Serialize};

//==============================================================================
// Label Definitions (labels/CustomLabels.labels)
//==============================================================================

/// Root element name of the label definition file
pub const CUSTOM_LABELS_ROOT: &str = "CustomLabels";

/// A single custom label definition
///
/// Field order matches the element order the platform writes, so a
/// serialized label reads the same as the original metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLabel {
    /// Unique label name, the join key for translations and spreadsheet rows
    #[serde(default)]
    pub full_name: String,

    /// Optional category tag used by the export filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    /// The label's native language code (e.g. "en_US")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,

    #[serde(default)]
    pub short_description: String,

    /// Current text in the label's native language
    #[serde(default)]
    pub value: String,
}

impl CustomLabel {
    pub fn new(
        full_name: impl Into<String>,
        short_description: impl Into<String>,
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            short_description: short_description.into(),
            value: value.into(),
            language: Some(language.into()),
            ..Default::default()
        }
    }

    /// Builder-style helper for setting the category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories = Some(category.into());
        self
    }

    /// True when the label's own language is `lang`
    pub fn is_language(&self, lang: &str) -> bool {
        self.language.as_deref() == Some(lang)
    }
}

/// The whole label definition file, labels kept in file order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomLabels {
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    #[serde(rename = "labels", default)]
    pub labels: Vec<CustomLabel>,
}

impl CustomLabels {
    pub fn new(labels: Vec<CustomLabel>) -> Self {
        Self {
            xmlns: Some(METADATA_NAMESPACE.to_string()),
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

//==============================================================================
// Translations (translations/<lang>.translation)
//==============================================================================

/// Namespace the platform stamps on every metadata document
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// One translated custom label inside a language's translation file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Translated text
    #[serde(default)]
    pub label: String,

    /// Matches `CustomLabel::full_name`
    #[serde(default)]
    pub name: String,
}

impl TranslationEntry {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
        }
    }
}

/// A per-language translation file. Only the `customLabels` section is
/// read; every other section of the document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    #[serde(default)]
    pub custom_labels: Vec<TranslationEntry>,
}

impl Translations {
    pub fn len(&self) -> usize {
        self.custom_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom_labels.is_empty()
    }
}
