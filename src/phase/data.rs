//! Contribution phase input

use crate::error::{ProjectionError, Result};
use crate::sanitize;
use serde::{Deserialize, Serialize};

/// One contiguous span of months with a constant salary and contribution share
///
/// Numeric fields deserialize loosely (numbers, numeric strings, booleans,
/// null). A phase with salary, percentage or duration <= 0 is left out of a
/// projection chain entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    #[serde(default)]
    pub name: String,

    /// Monthly salary
    #[serde(default, deserialize_with = "sanitize::deserialize_number")]
    pub salary: f64,

    /// Share of salary invested each month, in percent (0-100)
    #[serde(default, deserialize_with = "sanitize::deserialize_number")]
    pub percentage: f64,

    #[serde(
        default,
        alias = "duration",
        alias = "duration_months",
        deserialize_with = "sanitize::deserialize_months"
    )]
    pub duration_months: u32,

    /// Starting balance; only read from the first phase of a chain
    #[serde(
        default,
        alias = "initial_amount",
        deserialize_with = "sanitize::deserialize_number"
    )]
    pub initial_amount: f64,
}

impl Phase {
    pub fn new(name: impl Into<String>, salary: f64, percentage: f64, duration_months: u32) -> Self {
        Self {
            name: name.into(),
            salary,
            percentage,
            duration_months,
            initial_amount: 0.0,
        }
    }

    /// Set the starting balance (builder style)
    pub fn with_initial_amount(mut self, initial_amount: f64) -> Self {
        self.initial_amount = initial_amount;
        self
    }

    /// Whether the phase takes part in a projection chain
    pub fn contributes(&self) -> bool {
        self.salary.is_finite()
            && self.salary > 0.0
            && self.percentage.is_finite()
            && self.percentage > 0.0
            && self.duration_months > 0
    }

    /// Amount invested each month: salary × percentage / 100
    pub fn monthly_contribution(&self) -> f64 {
        self.salary * self.percentage / 100.0
    }

    /// Reject durations above `limit` months before running a projection
    pub fn check_duration(&self, limit: u32) -> Result<()> {
        if self.duration_months > limit {
            return Err(ProjectionError::DurationCeiling {
                name: self.name.clone(),
                months: self.duration_months,
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributes() {
        assert!(Phase::new("Junior", 3500.0, 30.0, 24).contributes());
        assert!(!Phase::new("Zero salary", 0.0, 30.0, 24).contributes());
        assert!(!Phase::new("Zero pct", 3500.0, 0.0, 24).contributes());
        assert!(!Phase::new("Negative pct", 3500.0, -5.0, 24).contributes());
        assert!(!Phase::new("No time", 3500.0, 30.0, 0).contributes());
        assert!(!Phase::new("NaN", f64::NAN, 30.0, 24).contributes());
    }

    #[test]
    fn test_monthly_contribution() {
        let phase = Phase::new("Senior", 12000.0, 40.0, 48);
        assert!((phase.monthly_contribution() - 4800.0).abs() < 1e-9);
    }

    #[test]
    fn test_loose_deserialize() {
        let phase: Phase = serde_json::from_str(
            r#"{"name": "Pleno", "salary": "6500", "percentage": 35, "duration": "36", "initialAmount": null}"#,
        )
        .expect("valid phase");

        assert_eq!(phase.salary, 6500.0);
        assert_eq!(phase.percentage, 35.0);
        assert_eq!(phase.duration_months, 36);
        assert_eq!(phase.initial_amount, 0.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let phase: Phase = serde_json::from_str(r#"{"name": "Empty"}"#).expect("valid phase");
        assert_eq!(phase.salary, 0.0);
        assert_eq!(phase.duration_months, 0);
        assert!(!phase.contributes());
    }

    #[test]
    fn test_duration_ceiling() {
        let phase = Phase::new("Forever", 1000.0, 10.0, 5000);
        assert!(phase.check_duration(1200).is_err());
        assert!(phase.check_duration(6000).is_ok());
    }

    #[test]
    fn test_serializes_camel_case_and_reads_both_spellings() {
        let phase = Phase::new("Junior", 3000.0, 30.0, 24).with_initial_amount(1000.0);
        let json = serde_json::to_value(&phase).expect("serializes");

        assert_eq!(json["durationMonths"], 24);
        assert_eq!(json["initialAmount"], 1000.0);
        assert!(json.get("duration_months").is_none());

        let back: Phase = serde_json::from_value(json).expect("round trips");
        assert_eq!(back, phase);

        let snake: Phase = serde_json::from_str(
            r#"{"name": "Junior", "salary": 3000, "percentage": 30, "duration_months": 24, "initial_amount": 1000}"#,
        )
        .expect("valid phase");
        assert_eq!(snake, phase);
    }
}
