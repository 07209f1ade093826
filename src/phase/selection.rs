//! Phase selection over the career catalogue
//!
//! Owns the per-phase settings (salary, percentage, duration) and the set of
//! selected phases, and resolves them into the ordered [`Phase`] list that the
//! projection engine consumes.

use super::Phase;
use crate::assumptions::CareerCatalogue;
use crate::error::{ProjectionError, Result};
use crate::sanitize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowest contribution percentage a phase can be set to
pub const MIN_PERCENTAGE: f64 = 5.0;

/// Highest contribution percentage a phase can be set to
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Editable settings for one catalogue phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSettings {
    pub salary: f64,
    pub percentage: f64,
    pub duration_months: u32,
}

/// Selected catalogue phases with their settings and the starting balance
#[derive(Debug, Clone)]
pub struct PhaseSelection {
    catalogue: CareerCatalogue,
    settings: HashMap<&'static str, PhaseSettings>,
    /// Selected ids in the order they were selected
    selected: Vec<&'static str>,
    initial_amount: f64,
}

impl Default for PhaseSelection {
    fn default() -> Self {
        Self::new(CareerCatalogue::default())
    }
}

impl PhaseSelection {
    /// Start with every phase at its catalogue defaults and nothing selected
    pub fn new(catalogue: CareerCatalogue) -> Self {
        let settings = catalogue
            .iter()
            .map(|p| {
                (
                    p.id,
                    PhaseSettings {
                        salary: p.average_salary,
                        percentage: p.recommended_percentage,
                        duration_months: p.duration_months,
                    },
                )
            })
            .collect();

        Self {
            catalogue,
            settings,
            selected: Vec::new(),
            initial_amount: 0.0,
        }
    }

    /// Select every catalogue phase, in catalogue order
    pub fn select_all(&mut self) {
        self.selected = self.catalogue.iter().map(|p| p.id).collect();
    }

    pub fn catalogue(&self) -> &CareerCatalogue {
        &self.catalogue
    }

    fn catalogue_id(&self, id: &str) -> Result<&'static str> {
        self.catalogue
            .get(id)
            .map(|p| p.id)
            .ok_or_else(|| ProjectionError::UnknownPhase { id: id.to_string() })
    }

    fn settings_mut(&mut self, id: &str) -> Result<&mut PhaseSettings> {
        let key = self.catalogue_id(id)?;
        self.settings
            .get_mut(key)
            .ok_or_else(|| ProjectionError::UnknownPhase { id: id.to_string() })
    }

    /// Flip a phase on or off. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let key = self.catalogue_id(id)?;
        if let Some(pos) = self.selected.iter().position(|s| *s == key) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(key);
            Ok(true)
        }
    }

    /// Select a phase if it is not selected yet
    pub fn select(&mut self, id: &str) -> Result<()> {
        if !self.is_selected(id) {
            self.toggle(id)?;
        }
        Ok(())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| *s == id)
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn settings(&self, id: &str) -> Option<&PhaseSettings> {
        self.settings.get(id)
    }

    /// Monthly salary, clamped to >= 0
    pub fn set_salary(&mut self, id: &str, salary: f64) -> Result<()> {
        self.settings_mut(id)?.salary = sanitize::amount(salary);
        Ok(())
    }

    /// Contribution percentage, clamped to [`MIN_PERCENTAGE`, `MAX_PERCENTAGE`]
    pub fn set_percentage(&mut self, id: &str, percentage: f64) -> Result<()> {
        let value = if percentage.is_finite() {
            percentage.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
        } else {
            MIN_PERCENTAGE
        };
        self.settings_mut(id)?.percentage = value;
        Ok(())
    }

    /// Duration in months, truncated and clamped to >= 0
    pub fn set_duration(&mut self, id: &str, months: f64) -> Result<()> {
        self.settings_mut(id)?.duration_months = sanitize::whole_months(months);
        Ok(())
    }

    /// Starting balance for the first resolved phase, clamped to >= 0
    pub fn set_initial_amount(&mut self, amount: f64) {
        self.initial_amount = sanitize::amount(amount);
    }

    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    /// Resolve the selection into the phase list for a projection
    ///
    /// Keeps selected phases with a positive salary and duration, in
    /// selection order. The starting balance goes on the first one.
    pub fn resolved_phases(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> = self
            .selected
            .iter()
            .filter_map(|id| {
                let entry = self.catalogue.get(id)?;
                let settings = self.settings.get(id)?;
                if settings.salary <= 0.0 || settings.duration_months == 0 {
                    debug!("Phase '{}' has no salary or duration, leaving it out", entry.name);
                    return None;
                }
                Some(Phase::new(
                    entry.name,
                    settings.salary,
                    settings.percentage,
                    settings.duration_months,
                ))
            })
            .collect();

        if let Some(first) = phases.first_mut() {
            first.initial_amount = self.initial_amount;
        }
        phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_catalogue() {
        let selection = PhaseSelection::default();
        let junior = selection.settings("junior").expect("junior settings");

        assert_eq!(junior.salary, 3500.0);
        assert_eq!(junior.percentage, 30.0);
        assert_eq!(junior.duration_months, 24);
        assert!(selection.resolved_phases().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut selection = PhaseSelection::default();

        assert!(selection.toggle("senior").expect("known id"));
        assert!(selection.is_selected("senior"));
        assert!(!selection.toggle("senior").expect("known id"));
        assert!(!selection.is_selected("senior"));

        assert!(selection.toggle("cto").is_err());
    }

    #[test]
    fn test_resolved_in_selection_order_with_seed_on_first() {
        let mut selection = PhaseSelection::default();
        selection.set_initial_amount(5000.0);
        selection.select("senior").expect("known id");
        selection.select("junior").expect("known id");

        let phases = selection.resolved_phases();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].name, "Senior");
        assert_eq!(phases[0].initial_amount, 5000.0);
        assert_eq!(phases[1].name, "Junior");
        assert_eq!(phases[1].initial_amount, 0.0);
    }

    #[test]
    fn test_seed_moves_past_invalid_phase() {
        let mut selection = PhaseSelection::default();
        selection.set_initial_amount(1000.0);
        selection.select("intern").expect("known id");
        selection.select("junior").expect("known id");
        selection.set_salary("intern", 0.0).expect("known id");

        let phases = selection.resolved_phases();
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].name, "Junior");
        assert_eq!(phases[0].initial_amount, 1000.0);
    }

    #[test]
    fn test_setting_clamps() {
        let mut selection = PhaseSelection::default();

        selection.set_salary("mid", -100.0).expect("known id");
        selection.set_percentage("mid", 150.0).expect("known id");
        selection.set_duration("mid", 18.9).expect("known id");
        let mid = *selection.settings("mid").expect("mid settings");
        assert_eq!(mid.salary, 0.0);
        assert_eq!(mid.percentage, 100.0);
        assert_eq!(mid.duration_months, 18);

        selection.set_percentage("mid", 1.0).expect("known id");
        assert_eq!(selection.settings("mid").map(|s| s.percentage), Some(5.0));

        selection.set_duration("mid", -3.0).expect("known id");
        assert_eq!(selection.settings("mid").map(|s| s.duration_months), Some(0));

        selection.set_initial_amount(f64::NAN);
        assert_eq!(selection.initial_amount(), 0.0);
    }

    #[test]
    fn test_select_all() {
        let mut selection = PhaseSelection::default();
        selection.select_all();

        let names: Vec<String> = selection.resolved_phases().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Intern", "Junior", "Mid-level", "Senior", "Tech Lead"]);
    }
}
