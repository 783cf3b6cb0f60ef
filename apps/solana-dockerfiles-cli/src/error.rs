use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Csv(#[from] solana_dockerfiles_csvs::CsvError),

    #[error(transparent)]
    Sdk(#[from] solana_dockerfiles_sdk::SdkError),

    #[error("CSV validation failed")]
    ValidationFailed,
}
