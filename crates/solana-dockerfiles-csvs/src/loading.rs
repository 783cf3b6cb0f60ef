/*!
# CSV Reading & Writing

Rows are read strictly: a data row whose field count differs from the header
is reported as a [`CsvError::Csv`] rather than padded or truncated.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::VersionRow,
};
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;
use tracing::info;

// ================================================================================================
// CSV Reading
// ================================================================================================

/// Read every row of a versions CSV file, preserving file order
pub fn read_versions_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<VersionRow>> {
    let path = path.as_ref();
    if !path.try_exists()? {
        return Err(CsvError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: VersionRow = result?;
        rows.push(row);
    }

    info!("Loaded {} versions from CSV", rows.len());
    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write a versions CSV with the canonical headers
pub fn write_versions_csv<P: AsRef<Path>>(path: P, rows: &[VersionRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // Write data rows (csv crate automatically writes headers)
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
