//! Rate conventions and the built-in career phase catalogue

mod rate;
mod career;

pub use rate::{normalize_monthly_rate, RateBasis};
pub use career::{CareerCatalogue, CareerPhase};
