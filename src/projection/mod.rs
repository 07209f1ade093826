//! Projection engine for single-phase and chained multi-phase projections

mod results;
mod compound;
mod trajectory;
mod engine;

pub use results::{MonthlySample, PhaseOutcome, PhaseResult, ProjectionResult};
pub use compound::{compute_phase_outcome, round_cents};
pub use trajectory::{compute_trajectory, Trajectory};
pub use engine::{compute_chained_projection, ProjectionEngine};

// ============================================================================
// Default Scenario Values
// ============================================================================
// Values the calculator starts from before the user edits anything.

/// Default quoted interest rate, in percent
pub const DEFAULT_RATE: f64 = 1.0;

/// Default ceiling on a single phase's duration, in months (100 years)
pub const DEFAULT_MAX_PHASE_MONTHS: u32 = 1200;
