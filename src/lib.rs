//! Career Projection - compound-interest projection engine for career-phase investment plans
//!
//! This library provides:
//! - Annual/monthly rate normalization with true compounding conversion
//! - Closed-form lump-sum + annuity outcomes for a single contribution phase
//! - Month-by-month trajectories for charting
//! - Multi-phase chaining that carries each phase's balance into the next
//! - The built-in career phase catalogue, phase selection and scenario loading
//! - Summary metrics, labels and CSV export for presentation layers

pub mod error;
pub mod sanitize;
pub mod assumptions;
pub mod phase;
pub mod projection;
pub mod config;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use assumptions::{RateBasis, CareerCatalogue, CareerPhase};
pub use phase::{Phase, PhaseSelection};
pub use projection::{
    compute_chained_projection, compute_phase_outcome, compute_trajectory,
    MonthlySample, PhaseOutcome, PhaseResult, ProjectionEngine, ProjectionResult, Trajectory,
};
pub use config::ScenarioConfig;
pub use report::ProjectionSummary;
