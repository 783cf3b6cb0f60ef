use crate::{GeneratorConfig, SdkError, SdkResult, dockerfile_path, render_dockerfile};
use indexmap::IndexMap;
use solana_dockerfiles_csvs::VersionRow;
use std::path::PathBuf;

/// Output path to Dockerfile content, in first-seen row order
pub type DockerfileSet = IndexMap<PathBuf, String>;

/// Render one Dockerfile per row.
///
/// Rows sharing a version map to the same path; the later row's content wins.
pub fn generate_dockerfiles(
    rows: &[VersionRow],
    config: &GeneratorConfig,
) -> SdkResult<DockerfileSet> {
    let mut dockerfiles = DockerfileSet::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let (Some(version), Some(content)) = (row.version(), render_dockerfile(row, config))
        else {
            return Err(SdkError::MissingVersion { row: i + 1 });
        };
        dockerfiles.insert(dockerfile_path(&config.output_dir, version), content);
    }

    Ok(dockerfiles)
}
