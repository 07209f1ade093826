//! Chained multi-phase projection
//!
//! Phases run end to end: each phase starts from the balance the previous one
//! finished with, and the per-phase trajectories are joined into one timeline.

use super::compound::{self, round_cents};
use super::trajectory::Trajectory;
use super::{MonthlySample, PhaseOutcome, PhaseResult, ProjectionResult};
use crate::assumptions::RateBasis;
use crate::phase::Phase;
use crate::sanitize;
use log::debug;

/// Largest number of evolution samples reserved up front (100 years is 1201)
const EVOLUTION_RESERVE_LIMIT: usize = 1 << 16;

/// Capacity to reserve for a chained evolution of `total_months` months
fn evolution_capacity(total_months: u32) -> usize {
    (total_months as usize).saturating_add(1).min(EVOLUTION_RESERVE_LIMIT)
}

/// Projection engine bound to one quoted rate
///
/// Holds no mutable state; one engine can serve any number of projections,
/// from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    rate: f64,
    basis: RateBasis,
    monthly_rate: f64,
}

impl ProjectionEngine {
    /// Create an engine for a percentage `rate` quoted on `basis`
    pub fn new(rate: f64, basis: RateBasis) -> Self {
        Self {
            rate,
            basis,
            monthly_rate: basis.monthly_rate(rate),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn basis(&self) -> RateBasis {
        self.basis
    }

    /// Effective monthly rate (fraction)
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Closed-form outcome of one phase at this engine's rate
    pub fn phase_outcome(&self, initial_amount: f64, monthly_contribution: f64, months: u32) -> PhaseOutcome {
        compound::outcome(
            sanitize::amount(initial_amount),
            sanitize::amount(monthly_contribution),
            self.monthly_rate,
            months.max(1),
        )
    }

    /// Monthly trajectory of one phase at this engine's rate
    pub fn trajectory(&self, initial_amount: f64, monthly_contribution: f64, months: u32) -> Trajectory {
        Trajectory::new(
            sanitize::amount(initial_amount),
            sanitize::amount(monthly_contribution),
            self.monthly_rate,
            months.max(1),
        )
    }

    /// Chain `phases` end to end
    ///
    /// The seed balance is the `initial_amount` of the first phase in the
    /// list. Phases with no salary, percentage or duration are skipped. If
    /// nothing is left, the result is [`ProjectionResult::empty`].
    pub fn project(&self, phases: &[Phase]) -> ProjectionResult {
        let Some(first) = phases.first() else {
            return ProjectionResult::empty();
        };
        let seed = sanitize::amount(first.initial_amount);

        let contributing: Vec<&Phase> = phases
            .iter()
            .filter(|phase| {
                let keep = phase.contributes();
                if !keep {
                    debug!(
                        "Skipping phase '{}' (salary={}, percentage={}, months={})",
                        phase.name, phase.salary, phase.percentage, phase.duration_months
                    );
                }
                keep
            })
            .collect();

        if contributing.is_empty() {
            debug!("No contributing phases out of {}", phases.len());
            return ProjectionResult::empty();
        }

        let total_months: u32 = contributing
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.duration_months));
        let mut evolution: Vec<MonthlySample> = Vec::with_capacity(evolution_capacity(total_months));
        let mut phase_details = Vec::with_capacity(contributing.len());

        let mut balance = seed;
        let mut invested = seed;
        let mut current_month = 0u32;

        for (index, phase) in contributing.iter().enumerate() {
            let contribution = phase.monthly_contribution();
            let months = phase.duration_months;

            let outcome = self.phase_outcome(balance, contribution, months);
            let phase_invested = contribution * months as f64;
            let phase_interest = outcome.final_amount - balance - phase_invested;

            debug!(
                "Phase '{}': months {}..{}, {:.2} -> {:.2}",
                phase.name,
                current_month,
                current_month.saturating_add(months),
                balance,
                outcome.final_amount
            );

            phase_details.push(PhaseResult {
                name: phase.name.clone(),
                salary: phase.salary,
                percentage: phase.percentage,
                duration_months: months,
                monthly_contribution: round_cents(contribution),
                initial_amount: round_cents(balance),
                final_amount: round_cents(outcome.final_amount),
                total_invested: round_cents(phase_invested),
                total_interest: round_cents(phase_interest),
            });

            // Month 0 of a later phase repeats the previous phase's last month
            let skip = if index == 0 { 0 } else { 1 };
            // Pushed one at a time; the reservation above is capped
            for sample in self.trajectory(balance, contribution, months).skip(skip) {
                evolution.push(MonthlySample {
                    month: current_month.saturating_add(sample.month),
                    phase: Some(phase.name.clone()),
                    ..sample
                });
            }

            current_month = current_month.saturating_add(months);
            balance = outcome.final_amount;
            invested += phase_invested;
        }

        ProjectionResult {
            final_amount: round_cents(balance),
            total_invested: round_cents(invested),
            total_interest: round_cents(balance - invested),
            total_months: current_month,
            initial_amount: seed,
            evolution,
            phase_details,
        }
    }
}

/// Chain `phases` at a percentage `rate` quoted on `basis`
pub fn compute_chained_projection(phases: &[Phase], rate: f64, basis: RateBasis) -> ProjectionResult {
    ProjectionEngine::new(rate, basis).project(phases)
}
