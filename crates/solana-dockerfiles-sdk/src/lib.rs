mod config;
mod dockerfile_generator;
mod dockerfile_template;
mod dockerfile_writer;
mod error;

pub use config::{DEFAULT_BASE_IMAGE, DEFAULT_OUTPUT_DIR, GeneratorConfig};
pub use dockerfile_generator::{DockerfileSet, generate_dockerfiles};
pub use dockerfile_template::{dockerfile_path, render_dockerfile};
pub use dockerfile_writer::write_dockerfiles;
pub use error::{SdkError, SdkResult};

// Re-export the row schema so callers need only one crate
pub use solana_dockerfiles_csvs::VersionRow;
