use thiserror::Error;

use crate::report::Diagnostic;

/// Errors from the fallible surfaces around the core: files, configuration
/// and diagnostics promoted to hard failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Error reading point list")]
    Csv(#[from] csv::Error),

    #[error("Point list needs time and thrust columns, found: {0}")]
    MissingColumns(String),

    #[error("Error deserializing flight configuration")]
    Toml(#[from] toml::de::Error),

    #[error("Error serializing flight summary")]
    Json(#[from] serde_json::Error),

    #[error("Burn time cutoff must be in (0, 1), got {0}")]
    BadCutoff(f64),

    #[error("{0}")]
    Reported(Diagnostic),
}

pub type Result<T> = std::result::Result<T, Error>;
