use std::path::PathBuf;
use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row}: Missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: Invalid version format '{version}'")]
    InvalidVersion { row: usize, version: String },
}

impl CsvError {
    /// 1-based data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvError::MissingField { row, .. } | CsvError::InvalidVersion { row, .. } => Some(*row),
            _ => None,
        }
    }
}
