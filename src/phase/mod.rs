//! Contribution phase data, CSV loading and catalogue-based selection

mod data;
pub mod loader;
pub mod selection;

pub use data::Phase;
pub use loader::{load_phases, load_phases_from_reader};
pub use selection::{PhaseSelection, PhaseSettings};
