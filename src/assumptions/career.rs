//! Built-in career phase catalogue
//!
//! Default salary, contribution percentage and duration for each stage of a
//! developer's career. Callers start from these defaults and override them
//! through [`crate::phase::PhaseSelection`].

use serde::Serialize;

/// A catalogue entry: one stage of a career with its default plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPhase {
    pub id: &'static str,
    pub name: &'static str,
    /// Average monthly salary
    pub average_salary: f64,
    /// Recommended share of salary to invest, in percent
    pub recommended_percentage: f64,
    pub duration_months: u32,
    pub description: &'static str,
}

impl CareerPhase {
    /// Monthly contribution at the recommended percentage
    pub fn recommended_contribution(&self) -> f64 {
        self.average_salary * self.recommended_percentage / 100.0
    }
}

/// Ordered catalogue of career phases
#[derive(Debug, Clone)]
pub struct CareerCatalogue {
    phases: Vec<CareerPhase>,
}

impl Default for CareerCatalogue {
    fn default() -> Self {
        Self {
            phases: vec![
                CareerPhase {
                    id: "intern",
                    name: "Intern",
                    average_salary: 1200.0,
                    recommended_percentage: 25.0,
                    duration_months: 12,
                    description: "First contact with software development",
                },
                CareerPhase {
                    id: "junior",
                    name: "Junior",
                    average_salary: 3500.0,
                    recommended_percentage: 30.0,
                    duration_months: 24,
                    description: "Start of the career, focused on learning",
                },
                CareerPhase {
                    id: "mid",
                    name: "Mid-level",
                    average_salary: 6500.0,
                    recommended_percentage: 35.0,
                    duration_months: 36,
                    description: "Consolidated experience, more responsibility",
                },
                CareerPhase {
                    id: "senior",
                    name: "Senior",
                    average_salary: 12000.0,
                    recommended_percentage: 40.0,
                    duration_months: 48,
                    description: "Technical leadership, mentoring teams",
                },
                CareerPhase {
                    id: "tech_lead",
                    name: "Tech Lead",
                    average_salary: 18000.0,
                    recommended_percentage: 45.0,
                    duration_months: 60,
                    description: "Strategic leadership, solution architecture",
                },
            ],
        }
    }
}

impl CareerCatalogue {
    /// Build a catalogue from custom entries, kept in the given order
    pub fn from_phases(phases: Vec<CareerPhase>) -> Self {
        Self { phases }
    }

    /// Look up a phase by id
    pub fn get(&self, id: &str) -> Option<&CareerPhase> {
        self.phases.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerPhase> {
        self.phases.iter()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Total months if every phase runs at its default duration
    pub fn total_default_months(&self) -> u32 {
        self.phases.iter().map(|p| p.duration_months).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue() {
        let catalogue = CareerCatalogue::default();

        assert_eq!(catalogue.len(), 5);
        assert_eq!(catalogue.iter().next().map(|p| p.id), Some("intern"));
        assert_eq!(catalogue.total_default_months(), 180);

        let senior = catalogue.get("senior").expect("senior exists");
        assert_eq!(senior.average_salary, 12000.0);
        assert_eq!(senior.recommended_percentage, 40.0);
        assert_eq!(senior.duration_months, 48);
    }

    #[test]
    fn test_recommended_contribution() {
        let catalogue = CareerCatalogue::default();
        let junior = catalogue.get("junior").expect("junior exists");
        // 3500 * 30% = 1050 per month
        assert!((junior.recommended_contribution() - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_id() {
        let catalogue = CareerCatalogue::default();
        assert!(catalogue.get("cto").is_none());
        assert!(!catalogue.contains("cto"));
    }
}
