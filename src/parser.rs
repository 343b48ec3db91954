use crate::error::{LabelError, LabelResult};
use crate::types::{CustomLabels, Translations};
use std::path::Path;
use tracing::info;

/// Parse a label definition file (`CustomLabels.labels`)
pub fn parse_custom_labels(path: &Path) -> LabelResult<CustomLabels> {
    let content = std::fs::read_to_string(path)?;
    let labels = parse_custom_labels_str(&content).map_err(|reason| LabelError::Xml {
        path: path.to_path_buf(),
        reason,
    })?;

    info!("total custom labels found [{}]", labels.len());
    Ok(labels)
}

/// Parse a per-language translation file (`<lang>.translation`)
pub fn parse_translations(path: &Path) -> LabelResult<Translations> {
    let content = std::fs::read_to_string(path)?;
    let translations =
        parse_translations_str(&content).map_err(|reason| LabelError::Xml {
            path: path.to_path_buf(),
            reason,
        })?;

    info!("total translations found [{}]", translations.len());
    Ok(translations)
}

fn parse_custom_labels_str(content: &str) -> Result<CustomLabels, String> {
    quick_xml::de::from_str(content).map_err(|e| e.to_string())
}

fn parse_translations_str(content: &str) -> Result<Translations, String> {
    quick_xml::de::from_str(content).map_err(|e| e.to_string())
}
