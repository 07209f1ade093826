//! Presentation helpers: summary metrics, month labels, currency and CSV export

use crate::error::Result;
use crate::projection::{MonthlySample, PhaseResult, ProjectionResult};
use serde::Serialize;
use std::io::Write;

/// Headline figures derived from a chained projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_amount: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    /// Interest as a percentage of the amount invested
    pub return_pct: f64,
    pub total_months: u32,
    /// Duration rounded to whole years
    pub years: u32,
    /// Average contribution per month, excluding the starting balance
    pub average_monthly_contribution: f64,
}

impl From<&ProjectionResult> for ProjectionSummary {
    fn from(result: &ProjectionResult) -> Self {
        let return_pct = if result.total_invested > 0.0 {
            result.total_interest / result.total_invested * 100.0
        } else {
            0.0
        };
        let months = result.total_months.max(1) as f64;

        Self {
            final_amount: result.final_amount,
            total_invested: result.total_invested,
            total_interest: result.total_interest,
            return_pct,
            total_months: result.total_months,
            years: (result.total_months as f64 / 12.0).round() as u32,
            average_monthly_contribution: (result.total_invested - result.initial_amount) / months,
        }
    }
}

/// Short axis label for a month index: `7m`, `2y`, `2y 7m`
pub fn month_label(month: u32) -> String {
    let years = month / 12;
    let months = month % 12;
    match (years, months) {
        (0, m) => format!("{}m", m),
        (y, 0) => format!("{}y", y),
        (y, m) => format!("{}y {}m", y, m),
    }
}

/// Format an amount in Brazilian reais: `R$ 1.234,56`
///
/// Non-finite values format as zero.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0,00".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

#[derive(Serialize)]
struct EvolutionRow<'a> {
    month: u32,
    label: String,
    phase: &'a str,
    total_amount: f64,
    total_invested: f64,
    total_interest: f64,
}

/// Write the evolution series as CSV, one row per month
pub fn write_evolution_csv<W: Write>(writer: W, evolution: &[MonthlySample]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for sample in evolution {
        wtr.serialize(EvolutionRow {
            month: sample.month,
            label: month_label(sample.month),
            phase: sample.phase.as_deref().unwrap_or(""),
            total_amount: sample.total_amount,
            total_invested: sample.total_invested,
            total_interest: sample.total_interest,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the per-phase breakdown as CSV
pub fn write_phase_details_csv<W: Write>(writer: W, details: &[PhaseResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for detail in details {
        wtr.serialize(detail)?;
    }
    wtr.flush()?;
    Ok(())
}
