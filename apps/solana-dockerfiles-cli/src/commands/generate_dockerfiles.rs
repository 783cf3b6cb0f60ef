use crate::error::{CliError, CliResult};
use solana_dockerfiles_csvs::{read_versions_csv, validate_versions};
use solana_dockerfiles_sdk::{generate_dockerfiles, write_dockerfiles, GeneratorConfig};
use std::path::PathBuf;
use tracing::{debug, info};

/// Load, validate and render the versions CSV, then write the Dockerfiles.
///
/// Nothing touches the output directory unless every row validates.
pub fn execute(csv_file_path: PathBuf, config: GeneratorConfig) -> CliResult<()> {
    debug!("Versions CSV: {}", csv_file_path.display());
    debug!("Output directory: {}", config.output_dir.display());
    debug!("Default base image: {}", config.default_base_image);

    let rows = read_versions_csv(&csv_file_path)?;

    if !validate_versions(&rows) {
        return Err(CliError::ValidationFailed);
    }

    let dockerfiles = generate_dockerfiles(&rows, &config)?;
    write_dockerfiles(&dockerfiles, &config.output_dir)?;

    info!("CSV processing completed successfully");
    Ok(())
}
