/*!
# Row Validation

Checks run over the whole row set before anything is written to disk. The
first failing row stops the scan.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::VersionRow,
};
use tracing::error;

/// Validate every row, logging the first failure
pub fn validate_versions(rows: &[VersionRow]) -> bool {
    match check_versions(rows) {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Validate required fields and version shape, returning the first failure
///
/// Row numbers are 1-based over data rows (the header is not counted).
pub fn check_versions(rows: &[VersionRow]) -> CsvResult<()> {
    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;

        let version = row.version().ok_or(CsvError::MissingField {
            row: row_number,
            field: "version",
        })?;

        if row.dockerfile_path().is_none() {
            return Err(CsvError::MissingField {
                row: row_number,
                field: "dockerfile_path",
            });
        }

        if !is_valid_version_format(version) {
            return Err(CsvError::InvalidVersion {
                row: row_number,
                version: version.to_string(),
            });
        }
    }

    Ok(())
}

/// Exactly three dot-separated integer parts.
///
/// Purely syntactic: `01.002.3` and `-1.0.0` pass, nothing is compared.
pub fn is_valid_version_format(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| is_integer(part))
}

/// Integer literal rules: surrounding whitespace, an optional sign, and
/// digit groups joined by single underscores (`1_000`).
fn is_integer(part: &str) -> bool {
    let part = part.trim();
    let digits = part
        .strip_prefix('+')
        .or_else(|| part.strip_prefix('-'))
        .unwrap_or(part);
    digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

// ================================================================================================
// Tests
// ================================================================================================
