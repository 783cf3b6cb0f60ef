use crate::{DockerfileSet, SdkError, SdkResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write every generated Dockerfile, overwriting existing files.
///
/// `output_dir` and each file's parent directories are created as needed.
/// Files are written whole but not atomically.
pub fn write_dockerfiles(dockerfiles: &DockerfileSet, output_dir: &Path) -> SdkResult<()> {
    create_dir_all(output_dir)?;

    for (path, content) in dockerfiles {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        fs::write(path, content).map_err(|source| SdkError::Io {
            path: path.clone(),
            source,
        })?;

        info!("Generated Dockerfile: {}", path.display());
    }

    Ok(())
}

fn create_dir_all(dir: &Path) -> SdkResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| SdkError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
