//! Scenario configuration
//!
//! A scenario names the rate, its basis, the starting balance and the
//! catalogue phases to run, with optional per-phase overrides. Loaded from
//! JSON; numeric fields accept loose values like the rest of the crate.
//!
//! ```json
//! {
//!   "rate": 12,
//!   "basis": "annual",
//!   "initial_amount": 1000,
//!   "phases": [
//!     { "id": "junior", "salary": 4000 },
//!     { "id": "senior", "duration_months": 60 }
//!   ]
//! }
//! ```

use crate::assumptions::{CareerCatalogue, RateBasis};
use crate::error::Result;
use crate::phase::{Phase, PhaseSelection};
use crate::projection::{ProjectionEngine, ProjectionResult, DEFAULT_MAX_PHASE_MONTHS, DEFAULT_RATE};
use crate::sanitize;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One selected catalogue phase with optional overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseChoice {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "sanitize::deserialize_optional_number")]
    pub salary: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "sanitize::deserialize_optional_number")]
    pub percentage: Option<f64>,

    #[serde(
        default,
        alias = "duration",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "sanitize::deserialize_optional_number"
    )]
    pub duration_months: Option<f64>,
}

impl PhaseChoice {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            salary: None,
            percentage: None,
            duration_months: None,
        }
    }
}

/// Parameters for one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Quoted interest rate in percent
    #[serde(default = "default_rate", deserialize_with = "sanitize::deserialize_number")]
    pub rate: f64,

    #[serde(default)]
    pub basis: RateBasis,

    #[serde(default, deserialize_with = "sanitize::deserialize_number")]
    pub initial_amount: f64,

    /// Catalogue phases to run, in order
    #[serde(default)]
    pub phases: Vec<PhaseChoice>,

    /// Longest duration accepted for a single phase
    #[serde(default = "default_max_phase_months")]
    pub max_phase_months: u32,
}

fn default_rate() -> f64 { DEFAULT_RATE }
fn default_max_phase_months() -> u32 { DEFAULT_MAX_PHASE_MONTHS }

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            basis: RateBasis::Annual,
            initial_amount: 0.0,
            phases: Vec::new(),
            max_phase_months: DEFAULT_MAX_PHASE_MONTHS,
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scenario from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a scenario from any JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Scenario that runs every catalogue phase at its defaults
    pub fn full_career(catalogue: &CareerCatalogue) -> Self {
        Self {
            phases: catalogue.iter().map(|p| PhaseChoice::new(p.id)).collect(),
            ..Default::default()
        }
    }

    pub fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.rate, self.basis)
    }

    /// Apply the scenario's choices to a fresh selection over `catalogue`
    ///
    /// Fails on ids the catalogue does not know.
    pub fn selection(&self, catalogue: &CareerCatalogue) -> Result<PhaseSelection> {
        let mut selection = PhaseSelection::new(catalogue.clone());
        selection.set_initial_amount(self.initial_amount);

        for choice in &self.phases {
            if selection.is_selected(&choice.id) {
                warn!("Phase '{}' listed twice, keeping the first entry", choice.id);
                continue;
            }
            selection.select(&choice.id)?;
            if let Some(salary) = choice.salary {
                selection.set_salary(&choice.id, salary)?;
            }
            if let Some(percentage) = choice.percentage {
                selection.set_percentage(&choice.id, percentage)?;
            }
            if let Some(months) = choice.duration_months {
                selection.set_duration(&choice.id, months)?;
            }
        }

        Ok(selection)
    }

    /// Resolve the phases to project, enforcing the duration ceiling
    pub fn resolved_phases(&self, catalogue: &CareerCatalogue) -> Result<Vec<Phase>> {
        let phases = self.selection(catalogue)?.resolved_phases();
        self.check_durations(&phases)?;
        Ok(phases)
    }

    /// Reject any phase longer than `max_phase_months`
    pub fn check_durations(&self, phases: &[Phase]) -> Result<()> {
        phases
            .iter()
            .try_for_each(|phase| phase.check_duration(self.max_phase_months))
    }

    /// Resolve the phases and run the projection
    pub fn run(&self, catalogue: &CareerCatalogue) -> Result<ProjectionResult> {
        let phases = self.resolved_phases(catalogue)?;
        Ok(self.engine().project(&phases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_defaults() {
        let config = ScenarioConfig::from_reader("{}".as_bytes()).expect("valid json");

        assert_eq!(config.rate, 1.0);
        assert_eq!(config.basis, RateBasis::Annual);
        assert_eq!(config.initial_amount, 0.0);
        assert!(config.phases.is_empty());
        assert_eq!(config.max_phase_months, 1200);
    }

    #[test]
    fn test_overrides_and_order() {
        let json = r#"{
            "rate": "1",
            "basis": "monthly",
            "initial_amount": 1000,
            "phases": [
                {"id": "junior", "salary": 3000, "percentage": 30, "duration_months": 24},
                {"id": "mid", "salary": 6000, "percentage": 35, "duration": "12"}
            ]
        }"#;
        let config = ScenarioConfig::from_reader(json.as_bytes()).expect("valid json");
        let phases = config
            .resolved_phases(&CareerCatalogue::default())
            .expect("known phases");

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].name, "Junior");
        assert_eq!(phases[0].salary, 3000.0);
        assert_eq!(phases[0].initial_amount, 1000.0);
        assert_eq!(phases[1].name, "Mid-level");
        assert_eq!(phases[1].duration_months, 12);

        let result = config.run(&CareerCatalogue::default()).expect("runs");
        assert_eq!(result.total_months, 36);
        assert_eq!(result.evolution.len(), 37);
    }

    #[test]
    fn test_unknown_phase() {
        let json = r#"{"phases": [{"id": "cto"}]}"#;
        let config = ScenarioConfig::from_reader(json.as_bytes()).expect("valid json");

        match config.run(&CareerCatalogue::default()) {
            Err(ProjectionError::UnknownPhase { id }) => assert_eq!(id, "cto"),
            other => panic!("expected UnknownPhase, got {:?}", other),
        }
    }

    #[test]
    fn test_duration_ceiling() {
        let json = r#"{"max_phase_months": 100, "phases": [{"id": "senior", "duration_months": 500}]}"#;
        let config = ScenarioConfig::from_reader(json.as_bytes()).expect("valid json");

        assert!(matches!(
            config.run(&CareerCatalogue::default()),
            Err(ProjectionError::DurationCeiling { months: 500, limit: 100, .. })
        ));
    }

    #[test]
    fn test_full_career() {
        let catalogue = CareerCatalogue::default();
        let result = ScenarioConfig::full_career(&catalogue).run(&catalogue).expect("runs");

        assert_eq!(result.phase_details.len(), 5);
        assert_eq!(result.total_months, catalogue.total_default_months());
    }

    #[test]
    fn test_duplicate_phase_ignored() {
        let json = r#"{"phases": [{"id": "junior"}, {"id": "junior", "salary": 1}]}"#;
        let config = ScenarioConfig::from_reader(json.as_bytes()).expect("valid json");
        let phases = config.resolved_phases(&CareerCatalogue::default()).expect("known phases");

        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].salary, 3500.0);
    }
}
