use std::path::PathBuf;

/// Directory the generated Dockerfiles land in unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "docker";

/// Base image for rows that leave `base_image` empty
pub const DEFAULT_BASE_IMAGE: &str = "ubuntu:20.04";

/// Configuration for Dockerfile generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root directory for generated files
    pub output_dir: PathBuf,

    /// `FROM` image used when a row has no `base_image`
    pub default_base_image: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_base_image: DEFAULT_BASE_IMAGE.to_string(),
        }
    }
}
