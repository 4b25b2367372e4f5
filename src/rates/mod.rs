//! Community service-charge and cooling rates
//!
//! A `RateTable` is built once (compiled-in defaults or CSV) and then only
//! read. It holds no interior mutability, so a single table can be shared by
//! reference across threads.

pub mod loader;

pub use loader::{DEFAULT_RATES_PATH, RATES_FILE};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Service charge rate used when a community is not in the table (per sq ft)
pub const DEFAULT_SERVICE_CHARGE_RATE: f64 = 12.0;

/// Cooling rate used when a community is not in the table (per sq ft)
pub const DEFAULT_COOLING_RATE: f64 = 0.0;

/// Per square foot rates for one community
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommunityRates {
    pub service_charge_per_sqft: f64,
    pub cooling_per_sqft: f64,
}

/// Normalize a community name into its lookup key
///
/// "Dubai Marina" -> "DUBAI_MARINA"
pub fn community_key(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// Render a lookup key back into a display name
///
/// "DUBAI_MARINA" -> "DUBAI MARINA"
pub fn display_name(key: &str) -> String {
    key.replace('_', " ")
}

/// Read-only community rate configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    /// Keyed by normalized community key; BTreeMap keeps iteration sorted
    communities: BTreeMap<String, CommunityRates>,
    fallback: CommunityRates,
}

impl RateTable {
    /// Build a table from (community name, rates) pairs and the fallback
    /// rates for unknown communities
    pub fn new<I, S>(entries: I, fallback: CommunityRates) -> Self
    where
        I: IntoIterator<Item = (S, CommunityRates)>,
        S: AsRef<str>,
    {
        let communities = entries
            .into_iter()
            .map(|(name, rates)| (community_key(name.as_ref()), rates))
            .collect();
        Self { communities, fallback }
    }

    /// Fifteen Dubai communities with approximate published rates
    pub fn dubai_default() -> Self {
        let rows: [(&str, f64, f64); 15] = [
            ("DUBAI_MARINA", 15.0, 6.0),
            ("DOWNTOWN_DUBAI", 18.0, 7.0),
            ("PALM_JUMEIRAH", 20.0, 7.5),
            ("JUMEIRAH_LAKE_TOWERS", 14.0, 6.0),
            ("BUSINESS_BAY", 16.0, 6.5),
            ("JUMEIRAH_VILLAGE_CIRCLE", 12.0, 5.0),
            ("DUBAI_SPORTS_CITY", 10.0, 4.5),
            ("INTERNATIONAL_CITY", 8.0, 4.0),
            ("DUBAI_SILICON_OASIS", 9.0, 4.5),
            // Villa communities with individual cooling
            ("ARABIAN_RANCHES", 12.0, 0.0),
            ("EMIRATES_HILLS", 22.0, 0.0),
            ("THE_SPRINGS", 11.0, 0.0),
            ("THE_GREENS", 13.0, 5.5),
            ("DUBAI_HILLS_ESTATE", 15.0, 6.0),
            ("BLUEWATERS_ISLAND", 22.0, 7.5),
        ];

        Self::new(
            rows.iter().map(|&(key, service, cooling)| {
                (
                    key,
                    CommunityRates {
                        service_charge_per_sqft: service,
                        cooling_per_sqft: cooling,
                    },
                )
            }),
            Self::default_fallback(),
        )
    }

    /// Load from `data/rates/community_rates.csv`
    pub fn from_csv() -> Result<Self, ConfigError> {
        Self::from_csv_path(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load from `community_rates.csv` inside the given directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ConfigError> {
        let entries = loader::load_community_rates(path)?;
        Ok(Self::new(entries, Self::default_fallback()))
    }

    fn default_fallback() -> CommunityRates {
        CommunityRates {
            service_charge_per_sqft: DEFAULT_SERVICE_CHARGE_RATE,
            cooling_per_sqft: DEFAULT_COOLING_RATE,
        }
    }

    /// Rates for a community if it is listed
    pub fn get(&self, community_name: &str) -> Option<&CommunityRates> {
        self.communities.get(&community_key(community_name))
    }

    /// Rates for a community, falling back to the default rates
    pub fn lookup(&self, community_name: &str) -> CommunityRates {
        self.get(community_name).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> CommunityRates {
        self.fallback
    }

    /// Listed communities as (normalized key, rates), sorted by key
    pub fn communities(&self) -> impl Iterator<Item = (&str, &CommunityRates)> {
        self.communities.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::dubai_default()
    }
}
