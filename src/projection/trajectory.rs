//! Month-by-month balance trajectory for one phase

use super::compound::round_cents;
use super::MonthlySample;
use crate::assumptions::RateBasis;
use crate::sanitize;
use std::iter::FusedIterator;

/// Iterator over months `0..=months` of a single phase
///
/// Sample 0 is the starting balance. Each later month compounds the previous
/// balance and adds the contribution at month end. The running values are
/// kept unrounded; every emitted field is rounded to cents on its own.
#[derive(Debug, Clone)]
pub struct Trajectory {
    monthly_rate: f64,
    monthly_contribution: f64,
    amount: f64,
    invested: f64,
    month: u32,
    months: u32,
    done: bool,
}

impl Trajectory {
    /// Build from already sanitized inputs
    pub(crate) fn new(initial_amount: f64, monthly_contribution: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            monthly_rate,
            monthly_contribution,
            amount: initial_amount,
            invested: initial_amount,
            month: 0,
            months,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.months - self.month) as usize + 1
        }
    }
}

impl Iterator for Trajectory {
    type Item = MonthlySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let sample = MonthlySample {
            month: self.month,
            total_amount: round_cents(self.amount),
            total_invested: round_cents(self.invested),
            total_interest: round_cents(self.amount - self.invested),
            phase: None,
        };

        if self.month == self.months {
            self.done = true;
        } else {
            self.month += 1;
            self.amount = self.amount * (1.0 + self.monthly_rate) + self.monthly_contribution;
            self.invested += self.monthly_contribution;
        }

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trajectory {}

impl FusedIterator for Trajectory {}

/// Monthly trajectory with the same sanitization as [`super::compute_phase_outcome`]
///
/// Yields `months + 1` samples; the last one matches the closed-form final
/// balance to within a cent.
pub fn compute_trajectory(
    initial_amount: f64,
    monthly_contribution: f64,
    rate: f64,
    months: f64,
    basis: RateBasis,
) -> Trajectory {
    Trajectory::new(
        sanitize::amount(initial_amount),
        sanitize::amount(monthly_contribution),
        basis.monthly_rate(rate),
        sanitize::month_count(months),
    )
}
