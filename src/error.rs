use serde::Serialize;
use std::{io, path::PathBuf};
use thiserror::Error;
pub type Result<T> = std::result::Result<T, SovError>;
#[derive(Debug, Error)]
pub enum SovError {
    #[error("Could not detect SOV format. No header row found with expected column names.")]
    HeaderNotFound,
    #[error("Could not map any columns from the SOV header row.")]
    NoColumnsMapped,
    #[error("unsupported spreadsheet extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("workbook has no worksheets: {}", .0.display())]
    EmptyWorkbook(PathBuf),
    #[error("failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid dictionary data: {0}")]
    Dictionary(#[from] serde_json::Error),
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}
impl SovError {
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
        }
    }
}
