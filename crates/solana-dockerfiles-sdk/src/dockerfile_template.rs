use crate::GeneratorConfig;
use solana_dockerfiles_csvs::VersionRow;
use std::path::{Path, PathBuf};

/// `<output_dir>/v<version>.Dockerfile`
pub fn dockerfile_path(output_dir: &Path, version: &str) -> PathBuf {
    output_dir.join(format!("v{version}.Dockerfile"))
}

/// Render the Dockerfile text for one row.
///
/// Returns `None` when the row has no version. `additional_deps` is inserted
/// without escaping.
pub fn render_dockerfile(row: &VersionRow, config: &GeneratorConfig) -> Option<String> {
    let version = row.version()?;
    let base_image = row
        .base_image()
        .unwrap_or(config.default_base_image.as_str());
    let additional_deps = row.additional_deps();

    Some(format!(
        r##"FROM {base_image}
LABEL org.opencontainers.image.url="https://github.com/solana-labs/solana/releases/tag/v{version}"

# Install Solana CLI version {version}
RUN apt-get update && apt-get install -y \
    curl \
    build-essential \
    pkg-config \
    libudev-dev \
    && rm -rf /var/lib/apt/lists/*

# Install Rust
RUN curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y
ENV PATH="/root/.cargo/bin:${{PATH}}"

# Install Solana CLI
RUN sh -c "$(curl -sSfL https://release.solana.com/v{version}/install)"
ENV PATH="/root/.local/share/solana/install/active_release/bin:${{PATH}}"

# Install additional dependencies if specified
{additional_deps}

WORKDIR /workspace
"##
    ))
}
