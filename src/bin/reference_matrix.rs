//! Export the service charge reference matrix to CSV
//!
//! One row per community, property type and reference size.
//!
//! Usage: cargo run --bin reference_matrix -- [--rates data/rates] [--output reference_matrix.csv]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use property_finance::{Calculator, RateTable};

#[derive(Parser, Debug)]
#[command(about = "Write the service charge reference matrix to CSV")]
struct Args {
    /// Directory containing community_rates.csv (built-in rates if omitted)
    #[arg(long)]
    rates: Option<PathBuf>,

    #[arg(long, default_value = "reference_matrix.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let rates = match &args.rates {
        Some(dir) => RateTable::from_csv_path(dir)
            .with_context(|| format!("loading community rates from {}", dir.display()))?,
        None => RateTable::dubai_default(),
    };
    println!("Loaded rates for {} communities", rates.len());

    let calc = Calculator::with_rates(rates);
    let matrix = calc.reference_matrix();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &matrix {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} reference estimates to {}", matrix.len(), args.output.display());

    if let (Some(low), Some(high)) = (
        matrix.iter().min_by(|a, b| a.total_annual_charges.total_cmp(&b.total_annual_charges)),
        matrix.iter().max_by(|a, b| a.total_annual_charges.total_cmp(&b.total_annual_charges)),
    ) {
        println!(
            "  Lowest:  {:>12.2}/year ({} {} {} sq ft)",
            low.total_annual_charges, low.community_name, low.property_type, low.property_size
        );
        println!(
            "  Highest: {:>12.2}/year ({} {} {} sq ft)",
            high.total_annual_charges, high.community_name, high.property_type, high.property_size
        );
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
