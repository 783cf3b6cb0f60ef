use std::path::PathBuf;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Rows must pass validation before generation
    #[error("Row {row}: no version to generate a Dockerfile for")]
    MissingVersion { row: usize },
}
