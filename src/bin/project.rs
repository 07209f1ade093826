//! Run one career projection and print the summary
//!
//! Phases come from a scenario JSON file, a phase CSV table, or (by default)
//! the full built-in career catalogue.

use anyhow::{Context, Result};
use career_projection::phase::load_phases;
use career_projection::report::{format_currency, month_label, write_evolution_csv};
use career_projection::{CareerCatalogue, ProjectionSummary, RateBasis, ScenarioConfig};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "project")]
#[command(about = "Project net worth across career phases with compound interest")]
struct Args {
    /// Scenario JSON file (rate, basis, initial amount, phases)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Phase CSV table (name,salary,percentage,duration_months[,initial_amount])
    #[arg(short, long, conflicts_with = "config")]
    phases: Option<PathBuf>,

    /// Interest rate in percent, overrides the scenario
    #[arg(short, long)]
    rate: Option<f64>,

    /// Whether the rate is annual or monthly, overrides the scenario
    #[arg(short, long, value_enum)]
    basis: Option<RateBasis>,

    /// Starting balance, overrides the scenario
    #[arg(short, long)]
    initial: Option<f64>,

    /// Write the monthly evolution to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let catalogue = CareerCatalogue::default();
    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::full_career(&catalogue),
    };
    if let Some(rate) = args.rate {
        scenario.rate = rate;
    }
    if let Some(basis) = args.basis {
        scenario.basis = basis;
    }
    if let Some(initial) = args.initial {
        scenario.initial_amount = initial;
    }

    let phases = match &args.phases {
        Some(path) => {
            let mut phases = load_phases(path)
                .with_context(|| format!("Failed to load phases {}", path.display()))?;
            if let (Some(initial), Some(first)) = (args.initial, phases.first_mut()) {
                first.initial_amount = initial;
            }
            scenario.check_durations(&phases)?;
            phases
        }
        None => scenario.resolved_phases(&catalogue)?,
    };

    let engine = scenario.engine();
    let result = engine.project(&phases);
    log::info!("Projected {} phases in {:?}", result.phase_details.len(), start.elapsed());

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_evolution_csv(BufWriter::new(file), &result.evolution)?;
        println!("Evolution written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No phase with salary, percentage and duration above zero; nothing to project.");
        return Ok(());
    }

    let summary = ProjectionSummary::from(&result);
    println!(
        "Rate: {}% {:?} ({:.4}% per month)",
        scenario.rate,
        scenario.basis,
        engine.monthly_rate() * 100.0
    );
    println!("\nSummary:");
    println!("  Final amount:     {}", format_currency(summary.final_amount));
    println!("  Total invested:   {}", format_currency(summary.total_invested));
    println!("  Total interest:   {}", format_currency(summary.total_interest));
    println!("  Return:           +{:.1}%", summary.return_pct);
    println!("  Duration:         {} months ({} years)", summary.total_months, summary.years);
    println!("  Initial amount:   {}", format_currency(result.initial_amount));
    println!("  Avg contribution: {}/month", format_currency(summary.average_monthly_contribution));

    println!("\n{:<12} {:>14} {:>14} {:>8} {:>16} {:>16} {:>16}",
             "Phase", "Salary", "Monthly", "Months", "Start", "Interest", "End");
    for detail in &result.phase_details {
        println!("{:<12} {:>14} {:>14} {:>8} {:>16} {:>16} {:>16}",
                 detail.name,
                 format_currency(detail.salary),
                 format_currency(detail.monthly_contribution),
                 detail.duration_months,
                 format_currency(detail.initial_amount),
                 format_currency(detail.total_interest),
                 format_currency(detail.final_amount));
    }

    if let Some(last) = result.evolution.last() {
        println!("\nBalance at {}: {}", month_label(last.month), format_currency(last.total_amount));
    }

    Ok(())
}
