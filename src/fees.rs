//! One-time acquisition costs for a purchase

use serde::{Deserialize, Serialize};

use crate::error::{check, Result};

/// Fee percentages and fixed amounts applied to a purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Land department transfer fee, fraction of price
    pub dld_fee_rate: f64,
    /// Broker commission, fraction of price
    pub agency_fee_rate: f64,
    /// Fixed title registration fee
    pub registration_fee: f64,
    /// Mortgage registration, fraction of mortgage amount
    pub mortgage_registration_rate: f64,
    /// Fixed bank valuation fee (mortgaged purchases only)
    pub valuation_fee: f64,
    /// Bank processing fee, fraction of mortgage amount
    pub mortgage_processing_rate: f64,
    /// First-year property insurance, fraction of price
    pub property_insurance_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            dld_fee_rate: 0.04,
            agency_fee_rate: 0.02,
            registration_fee: 4_000.0,
            mortgage_registration_rate: 0.0025,
            valuation_fee: 3_000.0,
            mortgage_processing_rate: 0.01,
            property_insurance_rate: 0.0025,
        }
    }
}

/// Buyer-supplied costs added on top of the scheduled fees
///
/// Taken as given; negative amounts are not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseExtras {
    pub life_insurance_cost: f64,
    pub maintenance_deposit: f64,
    pub utility_connection_fees: f64,
    pub moving_costs: f64,
}

impl PurchaseExtras {
    pub fn total(&self) -> f64 {
        self.life_insurance_cost
            + self.maintenance_deposit
            + self.utility_connection_fees
            + self.moving_costs
    }
}

/// Itemized acquisition cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownResult {
    pub price: f64,
    pub mortgage_amount: f64,

    // Scheduled fees
    pub dld_fee: f64,
    pub agency_fee: f64,
    pub registration_fee: f64,
    pub mortgage_registration_fee: f64,
    pub valuation_fee: f64,
    pub mortgage_processing_fee: f64,
    pub property_insurance_cost: f64,

    // Buyer extras
    pub life_insurance_cost: f64,
    pub maintenance_deposit: f64,
    pub utility_connection_fees: f64,
    pub moving_costs: f64,

    /// Price plus every fee and extra
    pub total_cost: f64,
}

impl CostBreakdownResult {
    /// Everything paid on top of the price
    pub fn total_fees(&self) -> f64 {
        self.total_cost - self.price
    }
}

/// Computes acquisition costs from a `FeeSchedule`
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeScheduleCalculator {
    schedule: FeeSchedule,
}

impl FeeScheduleCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn compute(
        &self,
        price: f64,
        mortgage_amount: f64,
        extras: PurchaseExtras,
    ) -> Result<CostBreakdownResult> {
        check::positive("price", price)?;

        if extras.life_insurance_cost < 0.0
            || extras.maintenance_deposit < 0.0
            || extras.utility_connection_fees < 0.0
            || extras.moving_costs < 0.0
        {
            log::warn!("cost breakdown for price {:.2} includes negative extras: {:?}", price, extras);
        }

        let s = &self.schedule;

        let dld_fee = price * s.dld_fee_rate;
        let agency_fee = price * s.agency_fee_rate;
        let registration_fee = s.registration_fee;

        let (mortgage_registration_fee, valuation_fee, mortgage_processing_fee) = if mortgage_amount > 0.0 {
            (
                mortgage_amount * s.mortgage_registration_rate,
                s.valuation_fee,
                mortgage_amount * s.mortgage_processing_rate,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let property_insurance_cost = price * s.property_insurance_rate;

        let total_cost = price
            + dld_fee
            + agency_fee
            + registration_fee
            + mortgage_registration_fee
            + valuation_fee
            + mortgage_processing_fee
            + extras.life_insurance_cost
            + property_insurance_cost
            + extras.maintenance_deposit
            + extras.utility_connection_fees
            + extras.moving_costs;

        log::debug!("acquisition cost for price {:.2}: total {:.2}", price, total_cost);

        Ok(CostBreakdownResult {
            price,
            mortgage_amount,
            dld_fee,
            agency_fee,
            registration_fee,
            mortgage_registration_fee,
            valuation_fee,
            mortgage_processing_fee,
            property_insurance_cost,
            life_insurance_cost: extras.life_insurance_cost,
            maintenance_deposit: extras.maintenance_deposit,
            utility_connection_fees: extras.utility_connection_fees,
            moving_costs: extras.moving_costs,
            total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_extras() -> PurchaseExtras {
        PurchaseExtras {
            life_insurance_cost: 5_000.0,
            maintenance_deposit: 2_000.0,
            utility_connection_fees: 1_500.0,
            moving_costs: 3_000.0,
        }
    }

    #[test]
    fn test_reference_breakdown() {
        let result = FeeScheduleCalculator::default()
            .compute(1_000_000.0, 750_000.0, reference_extras())
            .unwrap();

        assert_relative_eq!(result.dld_fee, 40_000.0);
        assert_relative_eq!(result.agency_fee, 20_000.0);
        assert_eq!(result.registration_fee, 4_000.0);
        assert_relative_eq!(result.mortgage_registration_fee, 1_875.0);
        assert_eq!(result.valuation_fee, 3_000.0);
        assert_relative_eq!(result.mortgage_processing_fee, 7_500.0);
        assert_relative_eq!(result.property_insurance_cost, 2_500.0);
        assert_relative_eq!(result.total_cost, 1_090_375.0, epsilon = 1e-6);
    }

    #[test]
    fn test_total_reconciles_with_components() {
        let result = FeeScheduleCalculator::default()
            .compute(2_375_000.0, 1_500_000.0, reference_extras())
            .unwrap();

        let sum = result.price
            + result.dld_fee
            + result.agency_fee
            + result.registration_fee
            + result.mortgage_registration_fee
            + result.valuation_fee
            + result.mortgage_processing_fee
            + result.property_insurance_cost
            + reference_extras().total();
        assert_relative_eq!(result.total_cost, sum, max_relative = 1e-12);
        assert_relative_eq!(result.total_fees(), sum - result.price, max_relative = 1e-9);
    }

    #[test]
    fn test_cash_purchase_zeroes_mortgage_fees() {
        let result = FeeScheduleCalculator::default()
            .compute(1_000_000.0, 0.0, PurchaseExtras::default())
            .unwrap();

        assert_eq!(result.mortgage_registration_fee, 0.0);
        assert_eq!(result.valuation_fee, 0.0);
        assert_eq!(result.mortgage_processing_fee, 0.0);
        // Insurance applies with or without a mortgage
        assert_relative_eq!(result.property_insurance_cost, 2_500.0);
    }

    #[test]
    fn test_negative_extras_accepted() {
        let extras = PurchaseExtras {
            moving_costs: -500.0,
            ..PurchaseExtras::default()
        };
        let result = FeeScheduleCalculator::default()
            .compute(500_000.0, 0.0, extras)
            .unwrap();
        assert_eq!(result.moving_costs, -500.0);
    }

    #[test]
    fn test_price_must_be_positive() {
        let err = FeeScheduleCalculator::default()
            .compute(0.0, 0.0, PurchaseExtras::default())
            .unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule {
            agency_fee_rate: 0.0,
            ..FeeSchedule::default()
        };
        let result = FeeScheduleCalculator::new(schedule)
            .compute(1_000_000.0, 0.0, PurchaseExtras::default())
            .unwrap();
        assert_eq!(result.agency_fee, 0.0);
    }
}
