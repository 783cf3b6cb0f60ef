/*!
# Solana Version CSV Schema

This crate owns the CSV contract for the version build matrix consumed by
`solana-dockerfiles`.

## Schema File

### Versions CSV (`versions.csv`)
One row per Solana CLI release to containerize:
- `version`: Release identifier, three dot-separated integers (e.g. `1.14.23`)
- `dockerfile_path`: Required, free-form
- `base_image`: Optional container base image (defaults downstream)
- `additional_deps`: Optional Dockerfile snippet inserted verbatim

## Usage

```rust,no_run
use solana_dockerfiles_csvs::{read_versions_csv, validate_versions, CsvResult};

fn example() -> CsvResult<()> {
    let rows = read_versions_csv("versions.csv")?;

    if !validate_versions(&rows) {
        eprintln!("versions.csv has invalid rows");
    }

    Ok(())
}
```
*/

pub mod errors;
pub mod loading;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use loading::{read_versions_csv, write_versions_csv};
pub use schemas::{VersionRow, VERSIONS_CSV_HEADERS};
pub use validation::{check_versions, is_valid_version_format, validate_versions};
