//! Annual service charge estimation from community rates

use serde::{Deserialize, Serialize};

use super::components::ComponentFees;
use crate::error::{check, Result};
use crate::property::PropertyType;
use crate::rates::{community_key, display_name, CommunityRates, RateTable};

/// Unit sizes (sq ft) the reference matrix is generated for
pub const REFERENCE_SIZES: [f64; 4] = [800.0, 1_500.0, 2_500.0, 3_500.0];

/// Estimated recurring charges for one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceChargeResult {
    pub community_name: String,
    pub property_type: PropertyType,
    pub property_size: f64,

    // Rates applied
    pub service_charge_rate_per_sqft: f64,
    pub cooling_rate_per_sqft: f64,

    // Annual components
    pub annual_service_charge: f64,
    pub cooling_charges: f64,
    pub building_maintenance_fee: f64,
    pub security_fee: f64,
    pub cleaning_fee: f64,
    pub parking_fee: f64,
    pub gym_and_pool_fee: f64,
    pub misc_charges: f64,

    // Totals
    pub total_annual_charges: f64,
    pub monthly_charges: f64,

    /// True for reference-matrix entries, false for property estimates
    pub is_pre_filled: bool,
}

impl ServiceChargeResult {
    fn build(
        community_name: String,
        property_type: PropertyType,
        property_size: f64,
        rates: CommunityRates,
        is_pre_filled: bool,
    ) -> Self {
        let annual_service_charge = property_size * rates.service_charge_per_sqft;
        let cooling_charges = property_size * rates.cooling_per_sqft;
        let fees = ComponentFees::for_property(property_size, &property_type);

        let total_annual_charges = annual_service_charge
            + cooling_charges
            + fees.building_maintenance_fee
            + fees.security_fee
            + fees.cleaning_fee
            + fees.parking_fee
            + fees.gym_and_pool_fee
            + fees.misc_charges;

        Self {
            community_name,
            property_type,
            property_size,
            service_charge_rate_per_sqft: rates.service_charge_per_sqft,
            cooling_rate_per_sqft: rates.cooling_per_sqft,
            annual_service_charge,
            cooling_charges,
            building_maintenance_fee: fees.building_maintenance_fee,
            security_fee: fees.security_fee,
            cleaning_fee: fees.cleaning_fee,
            parking_fee: fees.parking_fee,
            gym_and_pool_fee: fees.gym_and_pool_fee,
            misc_charges: fees.misc_charges,
            total_annual_charges,
            monthly_charges: total_annual_charges / 12.0,
            is_pre_filled,
        }
    }
}

/// Service charge estimator borrowing a shared rate table
#[derive(Debug, Clone, Copy)]
pub struct ServiceChargeEstimator<'a> {
    rates: &'a RateTable,
}

impl<'a> ServiceChargeEstimator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Estimate charges for a specific unit
    ///
    /// Unknown communities are priced at the table's fallback rates.
    pub fn estimate(
        &self,
        community_name: &str,
        property_type: &PropertyType,
        property_size: f64,
    ) -> Result<ServiceChargeResult> {
        check::positive("property_size", property_size)?;

        if self.rates.get(community_name).is_none() {
            log::debug!("no rates for community {:?}, using fallback", community_name);
        }

        let result = ServiceChargeResult::build(
            community_name.to_string(),
            property_type.clone(),
            property_size,
            self.rates.lookup(community_name),
            false,
        );

        log::debug!(
            "service charges for {} {} sq ft in {}: {:.2}/year",
            property_type,
            property_size,
            community_name,
            result.total_annual_charges
        );

        Ok(result)
    }

    /// One pre-filled estimate per community, reference type and size
    ///
    /// Ordered by community key, then type, then size.
    pub fn generate_reference_matrix(&self) -> Vec<ServiceChargeResult> {
        let mut matrix =
            Vec::with_capacity(self.rates.len() * PropertyType::REFERENCE.len() * REFERENCE_SIZES.len());

        for (key, rates) in self.rates.communities() {
            matrix.extend(reference_rows(key, *rates));
        }

        matrix
    }

    /// Reference-matrix entries for a single community
    ///
    /// Empty if the community is not in the rate table.
    pub fn reference_estimates_for(&self, community_name: &str) -> Vec<ServiceChargeResult> {
        match self.rates.get(community_name) {
            Some(rates) => reference_rows(&community_key(community_name), *rates).collect(),
            None => Vec::new(),
        }
    }
}

/// Every reference type and size for one community key
fn reference_rows(key: &str, rates: CommunityRates) -> impl Iterator<Item = ServiceChargeResult> {
    let name = display_name(key);
    PropertyType::REFERENCE.into_iter().flat_map(move |property_type| {
        let name = name.clone();
        REFERENCE_SIZES.into_iter().map(move |size| {
            ServiceChargeResult::build(name.clone(), property_type.clone(), size, rates, true)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dubai_marina_apartment() {
        let rates = RateTable::dubai_default();
        let estimator = ServiceChargeEstimator::new(&rates);

        let result = estimator
            .estimate("Dubai Marina", &PropertyType::Apartment, 1_000.0)
            .unwrap();

        assert_eq!(result.community_name, "Dubai Marina");
        assert_eq!(result.service_charge_rate_per_sqft, 15.0);
        assert_eq!(result.annual_service_charge, 15_000.0);
        assert_eq!(result.cooling_charges, 6_000.0);
        assert!(!result.is_pre_filled);

        // 15000 + 6000 + 9000 components + 450 misc
        assert_relative_eq!(result.total_annual_charges, 30_450.0, epsilon = 1e-9);
        assert_relative_eq!(result.monthly_charges, 2_537.5, epsilon = 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let rates = RateTable::dubai_default();
        let estimator = ServiceChargeEstimator::new(&rates);

        for (community, ty, size) in [
            ("Palm Jumeirah", PropertyType::Villa, 4_200.0),
            ("The Springs", PropertyType::Townhouse, 1_850.0),
            ("Nowhere Gardens", PropertyType::Other("Studio".into()), 410.0),
        ] {
            let r = estimator.estimate(community, &ty, size).unwrap();
            let sum = r.annual_service_charge
                + r.cooling_charges
                + r.building_maintenance_fee
                + r.security_fee
                + r.cleaning_fee
                + r.parking_fee
                + r.gym_and_pool_fee
                + r.misc_charges;
            assert_eq!(r.total_annual_charges, sum);
            assert_eq!(r.monthly_charges, r.total_annual_charges / 12.0);
        }
    }

    #[test]
    fn test_unknown_community_uses_fallback() {
        let rates = RateTable::dubai_default();
        let result = ServiceChargeEstimator::new(&rates)
            .estimate("Al Furjan", &PropertyType::Townhouse, 2_000.0)
            .unwrap();

        assert_eq!(result.service_charge_rate_per_sqft, 12.0);
        assert_eq!(result.cooling_charges, 0.0);
        assert_eq!(result.parking_fee, 0.0);
    }

    #[test]
    fn test_size_must_be_positive() {
        let rates = RateTable::dubai_default();
        let estimator = ServiceChargeEstimator::new(&rates);

        for size in [0.0, -100.0, f64::NAN] {
            let err = estimator
                .estimate("Dubai Marina", &PropertyType::Apartment, size)
                .unwrap_err();
            assert_eq!(err.field(), Some("property_size"));
        }
    }

    #[test]
    fn test_reference_matrix() {
        let rates = RateTable::dubai_default();
        let matrix = ServiceChargeEstimator::new(&rates).generate_reference_matrix();

        assert_eq!(matrix.len(), 180);
        assert!(matrix.iter().all(|r| r.is_pre_filled));

        // First community by key, first type, all four sizes
        let first: Vec<_> = matrix.iter().take(4).collect();
        assert!(first.iter().all(|r| r.community_name == "ARABIAN RANCHES"));
        assert!(first.iter().all(|r| r.property_type == PropertyType::Apartment));
        assert_eq!(
            first.iter().map(|r| r.property_size).collect::<Vec<_>>(),
            REFERENCE_SIZES.to_vec()
        );
    }

    #[test]
    fn test_reference_matrix_is_deterministic() {
        let rates = RateTable::dubai_default();
        let estimator = ServiceChargeEstimator::new(&rates);
        assert_eq!(estimator.generate_reference_matrix(), estimator.generate_reference_matrix());
    }

    #[test]
    fn test_reference_estimates_for_community() {
        let rates = RateTable::dubai_default();
        let estimator = ServiceChargeEstimator::new(&rates);

        let rows = estimator.reference_estimates_for("downtown dubai");
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.community_name == "DOWNTOWN DUBAI"));
        assert!(rows.iter().all(|r| r.service_charge_rate_per_sqft == 18.0));

        assert!(estimator.reference_estimates_for("Atlantis").is_empty());
    }
}
