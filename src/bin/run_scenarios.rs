//! Run every rent-vs-buy scenario in a CSV file
//!
//! Scenarios are analyzed in parallel and written to a results CSV, one row
//! per scenario. Invalid scenarios are reported and skipped.
//!
//! Usage: cargo run --bin run_scenarios -- [--input data/scenarios/rent_vs_buy.csv] [--output rent_vs_buy_results.csv]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use property_finance::analysis::{load_scenarios, Scenario, DEFAULT_SCENARIOS_PATH};
use property_finance::{CalcError, RentVsBuyAnalysisResult, RentVsBuyAnalyzer};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Analyze a batch of rent-vs-buy scenarios")]
struct Args {
    #[arg(long, default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    #[arg(long, default_value = "rent_vs_buy_results.csv")]
    output: PathBuf,
}

/// One line of the results file
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    scenario: &'a str,
    price: f64,
    analysis_period_years: u32,
    monthly_mortgage_payment: f64,
    total_cost_of_buying: f64,
    total_cost_of_renting: f64,
    property_value_at_end: f64,
    remaining_mortgage_balance: f64,
    net_worth_after_buying: f64,
    net_worth_after_renting: f64,
    is_buying_better: bool,
    /// Empty when buying never breaks even
    break_even_year: Option<u32>,
}

impl<'a> OutputRow<'a> {
    fn new(scenario: &'a Scenario, result: &RentVsBuyAnalysisResult) -> Self {
        Self {
            scenario: &scenario.name,
            price: scenario.params.price,
            analysis_period_years: result.analysis_period_years,
            monthly_mortgage_payment: result.monthly_mortgage_payment,
            total_cost_of_buying: result.total_cost_of_buying,
            total_cost_of_renting: result.total_cost_of_renting,
            property_value_at_end: result.property_value_at_end,
            remaining_mortgage_balance: result.remaining_mortgage_balance,
            net_worth_after_buying: result.net_worth_after_buying,
            net_worth_after_renting: result.net_worth_after_renting,
            is_buying_better: result.is_buying_better,
            break_even_year: result.break_even_year(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let analyzer = RentVsBuyAnalyzer::new();

    println!("Running analyses...");
    let run_start = Instant::now();

    // Run analyses in parallel
    let results: Vec<(&Scenario, Result<RentVsBuyAnalysisResult, CalcError>)> = scenarios
        .par_iter()
        .map(|scenario| (scenario, analyzer.analyze(&scenario.params)))
        .collect();

    println!("Analyses complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut succeeded = 0;
    let mut buying_better = 0;
    for (scenario, result) in &results {
        match result {
            Ok(result) => {
                writer.serialize(OutputRow::new(scenario, result))?;
                succeeded += 1;
                if result.is_buying_better {
                    buying_better += 1;
                }
            }
            Err(err) => {
                log::warn!("scenario {} skipped: {}", scenario.name, err);
                eprintln!("  {}: {}", scenario.name, err);
            }
        }
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    println!("\nScenario Summary:");
    println!("{:<24} {:>16} {:>16} {:>10}", "Scenario", "Buying", "Renting", "Break-even");
    println!("{}", "-".repeat(70));
    for (scenario, result) in &results {
        if let Ok(r) = result {
            let break_even = match r.break_even_year() {
                Some(year) => format!("{} yrs", year),
                None => "never".to_string(),
            };
            println!(
                "{:<24} {:>16.0} {:>16.0} {:>10}",
                scenario.name, r.net_worth_after_buying, r.net_worth_after_renting, break_even
            );
        }
    }
    println!(
        "\n  {} of {} scenarios analyzed, buying better in {}",
        succeeded,
        results.len(),
        buying_better
    );

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
