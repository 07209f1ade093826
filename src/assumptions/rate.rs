//! Interest rate basis and conversion to an effective monthly rate

use crate::sanitize;
use serde::{Deserialize, Serialize};

/// Whether a quoted interest rate is annual or monthly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    #[default]
    Annual,
    Monthly,
}

impl RateBasis {
    /// Map the `isAnnual` toggle used by form-based callers
    pub fn from_is_annual(is_annual: bool) -> Self {
        if is_annual {
            RateBasis::Annual
        } else {
            RateBasis::Monthly
        }
    }

    pub fn is_annual(self) -> bool {
        self == RateBasis::Annual
    }

    /// Convert a percentage rate quoted on this basis to an effective monthly rate (fraction)
    ///
    /// Annual rates use compounding conversion, (1 + i)^(1/12) - 1, so twelve
    /// months at the monthly rate reproduce the annual growth factor exactly.
    /// Negative and non-finite rates are treated as 0.
    pub fn monthly_rate(self, rate_percent: f64) -> f64 {
        let rate = sanitize::amount(rate_percent) / 100.0;
        match self {
            RateBasis::Annual => (1.0 + rate).powf(1.0 / 12.0) - 1.0,
            RateBasis::Monthly => rate,
        }
    }
}

/// Effective monthly rate (fraction) for a percentage `rate` quoted on `basis`
pub fn normalize_monthly_rate(rate: f64, basis: RateBasis) -> f64 {
    basis.monthly_rate(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annual_conversion_compounds_back() {
        for annual in [0.5, 6.0, 12.0, 13.75, 40.0] {
            let monthly = normalize_monthly_rate(annual, RateBasis::Annual);
            let compounded = (1.0 + monthly).powi(12);
            assert_relative_eq!(compounded, 1.0 + annual / 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_annual_twelve_percent() {
        // 12% a.a. -> ~0.9489% a.m., not the naive 1%
        let monthly = RateBasis::Annual.monthly_rate(12.0);
        assert!((monthly * 100.0 - 0.948879).abs() < 1e-6);
    }

    #[test]
    fn test_monthly_passthrough() {
        assert_eq!(RateBasis::Monthly.monthly_rate(1.0), 0.01);
        assert_eq!(RateBasis::Monthly.monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_negative_rates_clamped() {
        assert_eq!(RateBasis::Monthly.monthly_rate(-10.0), 0.0);
        assert_eq!(RateBasis::Annual.monthly_rate(-10.0), 0.0);
        assert_eq!(RateBasis::Annual.monthly_rate(f64::NAN), 0.0);
    }

    #[test]
    fn test_basis_serde() {
        let basis: RateBasis = serde_json::from_str("\"monthly\"").expect("valid basis");
        assert_eq!(basis, RateBasis::Monthly);
        assert_eq!(serde_json::to_string(&RateBasis::Annual).expect("serializes"), "\"annual\"");
        assert!(RateBasis::from_is_annual(true).is_annual());
        assert!(!RateBasis::from_is_annual(false).is_annual());
    }
}
