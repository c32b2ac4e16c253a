use thiserror::Error;

use common::error::Error as BenchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Benchmark error: {0}")]
    BenchError(#[from] BenchError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render chart to {path}: {reason}")]
    ChartError { path: String, reason: String },
}
