//! Named rent-vs-buy scenarios loaded from CSV
//!
//! Expected columns: `scenario` followed by one column per
//! [`RentVsBuyParams`] field.

use std::io::Read;
use std::path::Path;

use super::RentVsBuyParams;
use crate::error::ConfigError;

/// Default location of the sample scenarios
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios/rent_vs_buy.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub params: RentVsBuyParams,
}

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario: String,
    price: f64,
    down_payment: f64,
    interest_rate: f64,
    loan_tenure_years: u32,
    appreciation_rate: f64,
    maintenance_cost: f64,
    property_tax: f64,
    monthly_rent: f64,
    rent_increase_rate: f64,
    security_deposit: f64,
    investment_return_rate: f64,
    analysis_period_years: u32,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        Scenario {
            name: self.scenario,
            params: RentVsBuyParams {
                price: self.price,
                down_payment: self.down_payment,
                interest_rate: self.interest_rate,
                loan_tenure_years: self.loan_tenure_years,
                appreciation_rate: self.appreciation_rate,
                maintenance_cost: self.maintenance_cost,
                property_tax: self.property_tax,
                monthly_rent: self.monthly_rent,
                rent_increase_rate: self.rent_increase_rate,
                security_deposit: self.security_deposit,
                investment_return_rate: self.investment_return_rate,
                analysis_period_years: self.analysis_period_years,
            },
        }
    }
}

/// Parse scenarios without validating them
///
/// Out-of-range parameters surface when each scenario is analyzed, so one
/// bad row does not stop a batch.
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ConfigError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ConfigError> {
    let file = std::fs::File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}
