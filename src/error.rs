//! Errors raised at the I/O edges of the calculator.
//!
//! The engine itself is total and never returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scenario file contains no rows: {0}")]
    EmptyScenarioFile(String),
}

pub type Result<T> = std::result::Result<T, RoiError>;
