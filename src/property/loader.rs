//! Load property profiles from a CSV file
//!
//! Expected columns: `id,name,price,size,property_type,community_name`

use super::{PropertyCatalog, PropertyProfile, PropertyType};
use crate::error::ConfigError;
use std::io::Read;
use std::path::Path;

/// Default location of the sample property list
pub const DEFAULT_PROPERTIES_PATH: &str = "data/properties.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u64,
    name: String,
    price: f64,
    size: f64,
    property_type: String,
    community_name: String,
}

impl CsvRow {
    fn into_profile(self) -> PropertyProfile {
        PropertyProfile {
            id: self.id,
            name: self.name,
            price: self.price,
            size: self.size,
            property_type: PropertyType::parse(&self.property_type),
            community_name: self.community_name,
        }
    }
}

/// Load properties from any reader producing CSV
pub fn load_properties_from_reader<R: Read>(
    reader: R,
    source: &str,
) -> Result<PropertyCatalog, ConfigError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut catalog = PropertyCatalog::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let profile = row.into_profile();

        if let Err(err) = profile.validate() {
            return Err(ConfigError::Invalid {
                file: source.to_string(),
                message: format!("property {}: {}", profile.id, err),
            });
        }
        if catalog.contains(profile.id) {
            return Err(ConfigError::Invalid {
                file: source.to_string(),
                message: format!("duplicate property id {}", profile.id),
            });
        }

        catalog.insert(profile);
    }

    Ok(catalog)
}

/// Load properties from a CSV file on disk
pub fn load_properties(path: &Path) -> Result<PropertyCatalog, ConfigError> {
    let file = std::fs::File::open(path)?;
    let catalog = load_properties_from_reader(file, &path.display().to_string())?;
    log::info!("Loaded {} properties from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load the sample property list from `data/properties.csv`
pub fn load_default_properties() -> Result<PropertyCatalog, ConfigError> {
    load_properties(Path::new(DEFAULT_PROPERTIES_PATH))
}
