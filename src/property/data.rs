//! Property attributes supplied to the calculators

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check, Result};

/// Kind of dwelling
///
/// Parsed case-insensitively. Anything that is not one of the three known
/// kinds is kept verbatim in `Other` and priced with the fallback fees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Apartment,
    Villa,
    Townhouse,
    Other(String),
}

impl PropertyType {
    /// Property types the reference matrix is generated for
    pub const REFERENCE: [PropertyType; 3] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Townhouse,
    ];

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "APARTMENT" => PropertyType::Apartment,
            "VILLA" => PropertyType::Villa,
            "TOWNHOUSE" => PropertyType::Townhouse,
            _ => PropertyType::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Other(name) => name,
        }
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        PropertyType::parse(&value)
    }
}

impl From<&str> for PropertyType {
    fn from(value: &str) -> Self {
        PropertyType::parse(value)
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial attributes of a single property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    /// Identifier assigned by whoever owns the property records
    pub id: u64,

    pub name: String,

    /// Asking price
    pub price: f64,

    /// Built-up area in square feet
    pub size: f64,

    pub property_type: PropertyType,

    pub community_name: String,
}

impl PropertyProfile {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        size: f64,
        property_type: PropertyType,
        community_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            size,
            property_type,
            community_name: community_name.into(),
        }
    }

    /// Check price and size are usable for calculations
    pub fn validate(&self) -> Result<()> {
        check::positive("price", self.price)?;
        check::positive("size", self.size)
    }
}
