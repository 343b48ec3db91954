use crate::error::{LabelError, LabelResult};
use crate::types::{CustomLabels, CUSTOM_LABELS_ROOT};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the label definition file as indented XML
pub fn custom_labels_to_string(labels: &CustomLabels) -> LabelResult<String> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some(CUSTOM_LABELS_ROOT))
        .map_err(|e| LabelError::Serialize(e.to_string()))?;
    serializer.indent(' ', 4);
    labels
        .serialize(serializer)
        .map_err(|e| LabelError::Serialize(e.to_string()))?;

    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

/// Write the label definition file back to `path`
///
/// The document is written to a sibling temp file first and renamed over
/// the original, so a failed write leaves the old file in place.
pub fn write_custom_labels(path: &Path, labels: &CustomLabels) -> LabelResult<()> {
    let content = custom_labels_to_string(labels)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, content)?;
    if let Err(e) = fs::rename(tmp_path, path) {
        let _ = fs::remove_file(tmp_path);
        return Err(LabelError::Io(e));
    }

    debug!("wrote {} labels to {}", labels.len(), path.display());
    Ok(())
}
