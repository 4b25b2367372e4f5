//! Inputs to the rent-vs-buy simulation

use serde::{Deserialize, Serialize};

use crate::error::{check, Result};
use crate::loan::MAX_TENURE_YEARS;

/// Longest analysis horizon in years
pub const MAX_ANALYSIS_YEARS: u32 = 30;

/// Buying and renting assumptions for one analysis
///
/// Rates are annual percentages; costs are annual unless named monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyParams {
    pub price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_tenure_years: u32,
    pub appreciation_rate: f64,
    pub maintenance_cost: f64,
    pub property_tax: f64,

    pub monthly_rent: f64,
    pub rent_increase_rate: f64,
    /// Refundable, so it never counts as a cost of renting
    pub security_deposit: f64,
    pub investment_return_rate: f64,

    pub analysis_period_years: u32,
}

impl RentVsBuyParams {
    /// Check every field against its allowed range, in declaration order
    pub fn validate(&self) -> Result<()> {
        check::positive("price", self.price)?;
        check::down_payment(self.down_payment, self.price)?;
        check::interest_rate("interest_rate", self.interest_rate)?;
        check::years("loan_tenure_years", self.loan_tenure_years, 1, MAX_TENURE_YEARS)?;
        check::within("appreciation_rate", self.appreciation_rate, -20.0, 20.0)?;
        check::non_negative("maintenance_cost", self.maintenance_cost)?;
        check::non_negative("property_tax", self.property_tax)?;
        check::positive("monthly_rent", self.monthly_rent)?;
        check::within("rent_increase_rate", self.rent_increase_rate, 0.0, 20.0)?;
        check::non_negative("security_deposit", self.security_deposit)?;
        check::within("investment_return_rate", self.investment_return_rate, 0.0, 30.0)?;
        check::years("analysis_period_years", self.analysis_period_years, 1, MAX_ANALYSIS_YEARS)?;
        Ok(())
    }

    pub fn loan_amount(&self) -> f64 {
        self.price - self.down_payment
    }

    /// Maintenance plus property tax, per month
    pub fn monthly_upkeep(&self) -> f64 {
        self.maintenance_cost / 12.0 + self.property_tax / 12.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 1.5M apartment, 20% down, 4.5% over 25 years, renting at 7,500/month
    pub(crate) fn sample_params() -> RentVsBuyParams {
        RentVsBuyParams {
            price: 1_500_000.0,
            down_payment: 300_000.0,
            interest_rate: 4.5,
            loan_tenure_years: 25,
            appreciation_rate: 3.0,
            maintenance_cost: 15_000.0,
            property_tax: 0.0,
            monthly_rent: 7_500.0,
            rent_increase_rate: 3.0,
            security_deposit: 7_500.0,
            investment_return_rate: 6.0,
            analysis_period_years: 10,
        }
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(sample_params().validate().is_ok());
        assert_eq!(sample_params().loan_amount(), 1_200_000.0);
        assert_eq!(sample_params().monthly_upkeep(), 1_250.0);
    }

    fn rejected_field(mutate: impl Fn(&mut RentVsBuyParams)) -> Option<&'static str> {
        let mut params = sample_params();
        mutate(&mut params);
        params.validate().unwrap_err().field()
    }

    #[test]
    fn test_each_bound_names_its_field() {
        assert_eq!(rejected_field(|p| p.price = 0.0), Some("price"));
        assert_eq!(rejected_field(|p| p.down_payment = -1.0), Some("down_payment"));
        assert_eq!(rejected_field(|p| p.down_payment = p.price), Some("down_payment"));
        assert_eq!(rejected_field(|p| p.interest_rate = 0.0), Some("interest_rate"));
        assert_eq!(rejected_field(|p| p.interest_rate = 100.5), Some("interest_rate"));
        assert_eq!(rejected_field(|p| p.loan_tenure_years = 0), Some("loan_tenure_years"));
        assert_eq!(rejected_field(|p| p.loan_tenure_years = 36), Some("loan_tenure_years"));
        assert_eq!(rejected_field(|p| p.appreciation_rate = -20.5), Some("appreciation_rate"));
        assert_eq!(rejected_field(|p| p.appreciation_rate = 21.0), Some("appreciation_rate"));
        assert_eq!(rejected_field(|p| p.maintenance_cost = -1.0), Some("maintenance_cost"));
        assert_eq!(rejected_field(|p| p.property_tax = f64::NAN), Some("property_tax"));
        assert_eq!(rejected_field(|p| p.monthly_rent = 0.0), Some("monthly_rent"));
        assert_eq!(rejected_field(|p| p.rent_increase_rate = 20.1), Some("rent_increase_rate"));
        assert_eq!(rejected_field(|p| p.security_deposit = -100.0), Some("security_deposit"));
        assert_eq!(rejected_field(|p| p.investment_return_rate = 31.0), Some("investment_return_rate"));
        assert_eq!(rejected_field(|p| p.analysis_period_years = 0), Some("analysis_period_years"));
        assert_eq!(rejected_field(|p| p.analysis_period_years = 31), Some("analysis_period_years"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut params = sample_params();
        params.appreciation_rate = -20.0;
        params.rent_increase_rate = 20.0;
        params.investment_return_rate = 0.0;
        params.interest_rate = 100.0;
        params.loan_tenure_years = 35;
        params.analysis_period_years = 30;
        params.down_payment = 0.0;
        assert!(params.validate().is_ok());
    }
}
