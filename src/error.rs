//! Errors raised at the edges of the crate (files, CSV tables, scenario validation)
//!
//! The projection engine itself never fails: malformed numbers are sanitized.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown career phase: {id}")]
    UnknownPhase { id: String },

    #[error("Phase '{name}' lasts {months} months, above the {limit}-month ceiling")]
    DurationCeiling { name: String, months: u32, limit: u32 },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
