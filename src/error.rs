use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for input, output, and configuration failures
///
/// Malformed data rows are not errors: records with too few fields or
/// non-numeric coordinates are skipped during parsing and only counted.
#[derive(Debug, Error)]
pub enum CellMatchError {
    #[error("failed to read input file '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse input file '{path}': {source}")]
    InputCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write results file '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
