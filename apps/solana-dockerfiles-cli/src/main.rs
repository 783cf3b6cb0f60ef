use clap::error::ErrorKind;
use clap::Parser;
use solana_dockerfiles_sdk::{GeneratorConfig, DEFAULT_BASE_IMAGE, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

mod commands;
mod error;

use error::CliError;

const USAGE: &str = "Usage: solana-dockerfiles <csv_file_path>";

#[derive(Parser)]
#[command(name = "solana-dockerfiles")]
#[command(about = "Generate one Dockerfile per Solana CLI version listed in a CSV file")]
#[command(version)]
struct Cli {
    /// Versions CSV (header: version,dockerfile_path[,base_image][,additional_deps])
    csv_file_path: PathBuf,

    /// Output directory for generated Dockerfiles
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Base image for rows without a base_image value
    #[arg(short, long, default_value = DEFAULT_BASE_IMAGE)]
    base_image: String,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: self.output_dir.clone(),
            default_base_image: self.base_image.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for usage text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = cli.generator_config();
    match commands::generate_dockerfiles::execute(cli.csv_file_path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ValidationFailed) => {
            error!("CSV validation failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Error processing CSV: {}", e);
            ExitCode::FAILURE
        }
    }
}
