//! Fixed and size-based fee components of the annual service charge

use crate::property::PropertyType;

/// Share of the component fees added as miscellaneous charges
pub const MISC_CHARGE_RATE: f64 = 0.05;

/// Cleaning fee per square foot
pub const CLEANING_RATE_PER_SQFT: f64 = 1.5;

/// Component fees that do not depend on the community
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentFees {
    pub building_maintenance_fee: f64,
    pub security_fee: f64,
    pub cleaning_fee: f64,
    pub parking_fee: f64,
    pub gym_and_pool_fee: f64,
    pub misc_charges: f64,
}

impl ComponentFees {
    pub fn for_property(property_size: f64, property_type: &PropertyType) -> Self {
        let building_maintenance_fee = building_maintenance_fee(property_size);
        let security_fee = security_fee(property_type);
        let cleaning_fee = property_size * CLEANING_RATE_PER_SQFT;
        let parking_fee = parking_fee(property_type);
        let gym_and_pool_fee = gym_and_pool_fee(property_type);

        let misc_charges = (building_maintenance_fee
            + security_fee
            + cleaning_fee
            + parking_fee
            + gym_and_pool_fee)
            * MISC_CHARGE_RATE;

        Self {
            building_maintenance_fee,
            security_fee,
            cleaning_fee,
            parking_fee,
            gym_and_pool_fee,
            misc_charges,
        }
    }

    pub fn total(&self) -> f64 {
        self.building_maintenance_fee
            + self.security_fee
            + self.cleaning_fee
            + self.parking_fee
            + self.gym_and_pool_fee
            + self.misc_charges
    }
}

/// Tiered by size in square feet
fn building_maintenance_fee(property_size: f64) -> f64 {
    if property_size < 800.0 {
        2_000.0
    } else if property_size < 1_500.0 {
        3_000.0
    } else if property_size < 2_500.0 {
        4_000.0
    } else {
        5_000.0
    }
}

fn security_fee(property_type: &PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 1_500.0,
        PropertyType::Villa => 2_500.0,
        PropertyType::Townhouse => 2_000.0,
        PropertyType::Other(_) => 1_800.0,
    }
}

/// Villas and townhouses have parking included elsewhere
fn parking_fee(property_type: &PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 1_000.0,
        _ => 0.0,
    }
}

fn gym_and_pool_fee(property_type: &PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 2_000.0,
        PropertyType::Villa => 3_000.0,
        PropertyType::Townhouse => 2_500.0,
        PropertyType::Other(_) => 2_000.0,
    }
}
