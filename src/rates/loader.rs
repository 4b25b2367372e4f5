//! CSV-based rate table loader
//!
//! Loads community rates from `community_rates.csv` in data/rates/

use super::CommunityRates;
use crate::error::ConfigError;
use std::fs::File;
use std::path::Path;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// File name of the community rate table inside the rates directory
pub const RATES_FILE: &str = "community_rates.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    community: String,
    service_charge_rate: f64,
    cooling_rate: f64,
}

/// Load community rates from CSV
/// Returns Vec<(community name, rates)> in file order
pub fn load_community_rates(path: &Path) -> Result<Vec<(String, CommunityRates)>, ConfigError> {
    let file_path = path.join(RATES_FILE);
    let file = File::open(&file_path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;

        for (column, value) in [
            ("service_charge_rate", row.service_charge_rate),
            ("cooling_rate", row.cooling_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    file: file_path.display().to_string(),
                    message: format!("{} for {} must be a non-negative number", column, row.community),
                });
            }
        }

        entries.push((
            row.community,
            CommunityRates {
                service_charge_per_sqft: row.service_charge_rate,
                cooling_per_sqft: row.cooling_rate,
            },
        ));
    }

    log::info!("Loaded {} community rates from {}", entries.len(), file_path.display());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateTable;

    #[test]
    fn test_load_default_rates() {
        let result = RateTable::from_csv();
        assert!(result.is_ok(), "Failed to load rates: {:?}", result.err());

        let table = result.unwrap();
        assert_eq!(table.len(), 15);

        // CSV and compiled-in table agree
        assert_eq!(table, RateTable::dubai_default());
    }

    #[test]
    fn test_missing_directory() {
        let result = load_community_rates(Path::new("data/does_not_exist"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
