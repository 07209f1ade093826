//! Closed-form compounding of a starting balance plus level monthly contributions
//!
//! FV = P × (1 + i)^n + A × [((1 + i)^n - 1) / i]
//!
//! Contributions are made at the end of each month (ordinary annuity).

use super::PhaseOutcome;
use crate::assumptions::RateBasis;
use crate::sanitize;

/// Round to cents, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unrounded closed-form values for an already sanitized phase
#[derive(Debug, Clone, Copy)]
pub(crate) struct Compounded {
    pub final_amount: f64,
    pub total_invested: f64,
}

pub(crate) fn compound(initial_amount: f64, monthly_contribution: f64, monthly_rate: f64, months: u32) -> Compounded {
    let n = months as f64;
    let growth = (1.0 + monthly_rate).powf(n);

    let lump_sum = initial_amount * growth;
    let annuity = if monthly_rate == 0.0 {
        monthly_contribution * n
    } else {
        monthly_contribution * ((growth - 1.0) / monthly_rate)
    };

    Compounded {
        final_amount: lump_sum + annuity,
        total_invested: initial_amount + monthly_contribution * n,
    }
}

/// Rounded outcome for already sanitized inputs
pub(crate) fn outcome(initial_amount: f64, monthly_contribution: f64, monthly_rate: f64, months: u32) -> PhaseOutcome {
    let raw = compound(initial_amount, monthly_contribution, monthly_rate, months);
    PhaseOutcome {
        final_amount: round_cents(raw.final_amount),
        total_invested: round_cents(raw.total_invested),
        total_interest: round_cents(raw.final_amount - raw.total_invested),
        monthly_rate,
        months,
        initial_amount,
    }
}

/// Final balance after `months` months of compounding with level contributions
///
/// Inputs are sanitized rather than rejected: negative or non-finite amounts
/// and rates become 0, month counts are truncated and anything <= 0 becomes 1.
/// Each monetary output is rounded to cents independently.
pub fn compute_phase_outcome(
    initial_amount: f64,
    monthly_contribution: f64,
    rate: f64,
    months: f64,
    basis: RateBasis,
) -> PhaseOutcome {
    outcome(
        sanitize::amount(initial_amount),
        sanitize::amount(monthly_contribution),
        basis.monthly_rate(rate),
        sanitize::month_count(months),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.345_000_1), 12.35);
        assert_eq!(round_cents(12.344), 12.34);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(100.0), 100.0);
    }

    #[test]
    fn test_annual_twelve_percent_contributions_only() {
        // 1000/month for 12 months at 12% a.a.
        // i = 1.12^(1/12) - 1, FV = 1000 × (1.12 - 1) / i
        let result = compute_phase_outcome(0.0, 1000.0, 12.0, 12.0, RateBasis::Annual);

        assert_abs_diff_eq!(result.monthly_rate_percent(), 0.948879, epsilon = 1e-6);
        assert_abs_diff_eq!(result.final_amount, 12646.50, epsilon = 0.01);
        assert_eq!(result.total_invested, 12000.0);
        assert_abs_diff_eq!(result.total_interest, 646.50, epsilon = 0.01);
        assert_eq!(result.months, 12);
    }

    #[test]
    fn test_zero_rate_no_interest() {
        let result = compute_phase_outcome(500.0, 250.0, 0.0, 10.0, RateBasis::Monthly);

        assert_eq!(result.final_amount, 500.0 + 250.0 * 10.0);
        assert_eq!(result.total_invested, 3000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_lump_sum_only() {
        // 1000 at 1% a.m. for 12 months = 1000 × 1.01^12
        let result = compute_phase_outcome(1000.0, 0.0, 1.0, 12.0, RateBasis::Monthly);
        assert_abs_diff_eq!(result.final_amount, 1126.83, epsilon = 1e-9);
        assert_eq!(result.total_invested, 1000.0);
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let clamped = compute_phase_outcome(-100.0, -5.0, -10.0, -12.0, RateBasis::Monthly);
        let baseline = compute_phase_outcome(0.0, 0.0, 0.0, 1.0, RateBasis::Monthly);

        assert_eq!(clamped, baseline);
        assert_eq!(clamped.months, 1);
        assert_eq!(clamped.final_amount, 0.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        let result = compute_phase_outcome(f64::NAN, 100.0, f64::INFINITY, f64::NAN, RateBasis::Monthly);

        assert_eq!(result.initial_amount, 0.0);
        assert_eq!(result.monthly_rate, 0.0);
        assert_eq!(result.months, 1);
        assert_eq!(result.final_amount, 100.0);
    }
}
