//! Projection output records

use serde::{Deserialize, Serialize};

/// One point of a balance trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySample {
    /// Months elapsed since the start of the projection
    pub month: u32,
    pub total_amount: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    /// Name of the phase this month belongs to (chained projections only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

/// Closed-form outcome of one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseOutcome {
    pub final_amount: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    /// Effective monthly rate as a fraction (0.01 = 1%)
    #[serde(rename = "normalizedMonthlyRate")]
    pub monthly_rate: f64,
    pub months: u32,
    /// Sanitized starting balance
    pub initial_amount: f64,
}

impl PhaseOutcome {
    /// Effective monthly rate in percent
    pub fn monthly_rate_percent(&self) -> f64 {
        self.monthly_rate * 100.0
    }
}

/// Per-phase breakdown of a chained projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    pub name: String,
    pub salary: f64,
    pub percentage: f64,
    pub duration_months: u32,
    pub monthly_contribution: f64,
    /// Balance carried in from the previous phase (or the seed)
    pub initial_amount: f64,
    pub final_amount: f64,
    /// Contributions made during this phase only
    pub total_invested: f64,
    /// Interest earned during this phase only
    pub total_interest: f64,
}

/// Aggregated result of a chained projection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub final_amount: f64,
    /// Seed plus every phase's contributions
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_months: u32,
    /// Seed balance the chain started from
    pub initial_amount: f64,
    pub evolution: Vec<MonthlySample>,
    pub phase_details: Vec<PhaseResult>,
}

impl ProjectionResult {
    /// Zero-valued result for an empty or fully filtered phase list
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.phase_details.is_empty()
    }
}
