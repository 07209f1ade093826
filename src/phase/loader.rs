//! Load contribution phases from CSV
//!
//! Expected header: `name,salary,percentage,duration_months[,initial_amount]`
//! (`duration` is accepted for the duration column). Numeric cells are
//! coerced loosely; rows that do not contribute are kept here and filtered by
//! the projection engine.

use super::Phase;
use crate::error::Result;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load phases from a CSV file
pub fn load_phases<P: AsRef<Path>>(path: P) -> Result<Vec<Phase>> {
    let path = path.as_ref();
    info!("Loading phases from {}", path.display());
    let file = File::open(path)?;
    load_phases_from_reader(file)
}

/// Load phases from any CSV reader
pub fn load_phases_from_reader<R: Read>(reader: R) -> Result<Vec<Phase>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut phases = Vec::new();
    for record in rdr.deserialize() {
        let phase: Phase = record?;
        if !phase.contributes() {
            debug!("Phase '{}' has no contribution and will be skipped", phase.name);
        }
        phases.push(phase);
    }

    debug!("Loaded {} phases", phases.len());
    Ok(phases)
}
