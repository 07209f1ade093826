//! Project one scenario across a range of rates and compare the outcomes
//!
//! Each rate runs on its own rayon task; the engine shares no state.

use anyhow::{bail, Context, Result};
use career_projection::report::format_currency;
use career_projection::{CareerCatalogue, ProjectionEngine, ProjectionSummary, RateBasis, ScenarioConfig};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rate_sweep")]
#[command(about = "Compare career projections across interest rates")]
struct Args {
    /// Scenario JSON file; defaults to the full career catalogue
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lowest rate in percent
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Highest rate in percent
    #[arg(long, default_value_t = 15.0)]
    to: f64,

    /// Rate increment in percent
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Whether the swept rates are annual or monthly, overrides the scenario
    #[arg(short, long, value_enum)]
    basis: Option<RateBasis>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(args.step > 0.0) || args.to < args.from {
        bail!("Need step > 0 and to >= from (got from={}, to={}, step={})", args.from, args.to, args.step);
    }

    let catalogue = CareerCatalogue::default();
    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::full_career(&catalogue),
    };
    if let Some(basis) = args.basis {
        scenario.basis = basis;
    }
    let phases = scenario.resolved_phases(&catalogue)?;

    let steps = ((args.to - args.from) / args.step).floor() as usize;
    let rates: Vec<f64> = (0..=steps).map(|i| args.from + i as f64 * args.step).collect();

    let start = Instant::now();
    let summaries: Vec<(f64, ProjectionSummary)> = rates
        .par_iter()
        .map(|&rate| {
            let result = ProjectionEngine::new(rate, scenario.basis).project(&phases);
            (rate, ProjectionSummary::from(&result))
        })
        .collect();
    log::info!("Ran {} projections in {:?}", summaries.len(), start.elapsed());

    println!("{} phases, {:?} rates", phases.len(), scenario.basis);
    println!("{:<8} {:>18} {:>18} {:>18} {:>10}",
             "Rate", "Final", "Invested", "Interest", "Return");
    for (rate, summary) in &summaries {
        println!("{:<8.2} {:>18} {:>18} {:>18} {:>9.1}%",
                 rate,
                 format_currency(summary.final_amount),
                 format_currency(summary.total_invested),
                 format_currency(summary.total_interest),
                 summary.return_pct);
    }

    Ok(())
}
