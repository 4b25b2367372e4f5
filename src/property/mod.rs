//! Property profiles and the lookup seam used to resolve them by id

mod data;
pub mod loader;

pub use data::{PropertyProfile, PropertyType};
pub use loader::{
    load_default_properties, load_properties, load_properties_from_reader, DEFAULT_PROPERTIES_PATH,
};

use crate::error::{CalcError, Result};

/// Something that can resolve a property id to its profile
///
/// Storage lives outside this crate; implementors report unknown ids as
/// `CalcError::NotFound` and callers pass that error on unchanged.
pub trait PropertySource {
    fn property(&self, id: u64) -> Result<PropertyProfile>;
}

/// In-memory property list, keeping insertion order
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<PropertyProfile>,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile, replacing any existing one with the same id
    pub fn insert(&mut self, profile: PropertyProfile) {
        match self.properties.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => self.properties.push(profile),
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.properties.iter().any(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyProfile> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for PropertyCatalog {
    fn property(&self, id: u64) -> Result<PropertyProfile> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CalcError::NotFound {
                entity: "property",
                id,
            })
    }
}

impl FromIterator<PropertyProfile> for PropertyCatalog {
    fn from_iter<I: IntoIterator<Item = PropertyProfile>>(iter: I) -> Self {
        let mut catalog = PropertyCatalog::new();
        for profile in iter {
            catalog.insert(profile);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u64, price: f64) -> PropertyProfile {
        PropertyProfile::new(id, "Unit", price, 900.0, PropertyType::Apartment, "Business Bay")
    }

    #[test]
    fn test_catalog_lookup_and_not_found() {
        let catalog: PropertyCatalog = vec![profile(1, 900_000.0), profile(2, 1_100_000.0)]
            .into_iter()
            .collect();

        assert_eq!(catalog.property(2).unwrap().price, 1_100_000.0);
        assert_eq!(
            catalog.property(9),
            Err(CalcError::NotFound { entity: "property", id: 9 })
        );
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut catalog = PropertyCatalog::new();
        catalog.insert(profile(1, 900_000.0));
        catalog.insert(profile(1, 950_000.0));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.property(1).unwrap().price, 950_000.0);
    }
}
