use std::path::PathBuf;
use thiserror::Error;

pub type LabelResult<T> = Result<T, LabelError>;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input file or folder does not exist
    #[error("{what} not found: {}", .path.display())]
    MissingFile { what: String, path: PathBuf },

    #[error("XML parsing error in {}: {reason}", .path.display())]
    Xml { path: PathBuf, reason: String },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// The spreadsheet header cannot describe a translation table
    #[error("Invalid table structure: {0}")]
    Shape(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("XML serialization error: {0}")]
    Serialize(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl LabelError {
    pub fn missing(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingFile {
            what: what.into(),
            path: path.into(),
        }
    }
}
