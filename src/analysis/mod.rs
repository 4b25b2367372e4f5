//! Multi-year rent-vs-buy analysis
//!
//! Buying builds equity through appreciation and loan repayment; renting
//! invests the down payment and any monthly surplus of owning over renting.
//! Both sides are compared as net worth at the end of the analysis period.
//!
//! # Example
//!
//! ```ignore
//! use property_finance::analysis::{RentVsBuyAnalyzer, RentVsBuyParams};
//!
//! let result = RentVsBuyAnalyzer::new().analyze(&params)?;
//! match result.break_even_year() {
//!     Some(year) => println!("buying catches up in year {}", year),
//!     None => println!("renting stays ahead"),
//! }
//! ```

mod params;
pub mod scenarios;
mod simulation;

pub use params::{RentVsBuyParams, MAX_ANALYSIS_YEARS};
pub use scenarios::{load_scenarios, Scenario, DEFAULT_SCENARIOS_PATH};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use simulation::{property_value, total_rent, InvestmentPath, Mortgage};

/// Outcome of a rent-vs-buy analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyAnalysisResult {
    pub analysis_period_years: u32,

    // Buying
    pub monthly_mortgage_payment: f64,
    /// Down payment, installments, maintenance and tax paid within the period
    pub total_cost_of_buying: f64,
    pub property_value_at_end: f64,
    pub remaining_mortgage_balance: f64,
    pub net_worth_after_buying: f64,

    // Renting
    pub total_cost_of_renting: f64,
    pub net_worth_after_renting: f64,

    pub is_buying_better: bool,
    /// First year buying is at least level with renting, or infinity
    pub break_even_years: f64,
}

impl RentVsBuyAnalysisResult {
    /// Break-even year, `None` if buying never catches up
    pub fn break_even_year(&self) -> Option<u32> {
        if self.break_even_years.is_finite() {
            Some(self.break_even_years as u32)
        } else {
            None
        }
    }

    /// Net worth advantage of buying over renting (negative if renting wins)
    pub fn buying_advantage(&self) -> f64 {
        self.net_worth_after_buying - self.net_worth_after_renting
    }
}

/// Net worth of both choices at the end of one year
///
/// Projection snapshots carry the loan's own remaining balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: u32,
    pub property_value: f64,
    pub remaining_balance: f64,
    pub net_worth_buying: f64,
    pub investment_value: f64,
}

impl YearlySnapshot {
    pub fn is_buying_ahead(&self) -> bool {
        self.net_worth_buying >= self.investment_value
    }
}

/// Rent-vs-buy simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct RentVsBuyAnalyzer;

impl RentVsBuyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, params: &RentVsBuyParams) -> Result<RentVsBuyAnalysisResult> {
        params.validate()?;

        let years = params.analysis_period_years;
        let mortgage = Mortgage::for_params(params);

        let total_cost_of_buying = params.down_payment
            + mortgage.payment * mortgage.payments_within(years) as f64
            + params.maintenance_cost * years as f64
            + params.property_tax * years as f64;

        let property_value_at_end = property_value(params.price, params.appreciation_rate, years);
        let remaining_mortgage_balance = mortgage.balance_after(years);
        let net_worth_after_buying = property_value_at_end - remaining_mortgage_balance;

        let total_cost_of_renting = total_rent(params.monthly_rent, params.rent_increase_rate, years);
        let net_worth_after_renting = InvestmentPath::new(params, mortgage.payment).value_after(years);

        let break_even_basis = Mortgage::break_even_basis(params);
        let break_even_years = self
            .snapshots(params, mortgage.payment, &break_even_basis)
            .find(YearlySnapshot::is_buying_ahead)
            .map_or(f64::INFINITY, |s| s.year as f64);

        log::debug!(
            "rent vs buy over {} years: buying {:.2}, renting {:.2}, break-even {}",
            years,
            net_worth_after_buying,
            net_worth_after_renting,
            break_even_years
        );

        Ok(RentVsBuyAnalysisResult {
            analysis_period_years: years,
            monthly_mortgage_payment: mortgage.payment,
            total_cost_of_buying,
            property_value_at_end,
            remaining_mortgage_balance,
            net_worth_after_buying,
            total_cost_of_renting,
            net_worth_after_renting,
            is_buying_better: net_worth_after_buying > net_worth_after_renting,
            break_even_years,
        })
    }

    /// One snapshot per year of the analysis period
    pub fn yearly_projection(&self, params: &RentVsBuyParams) -> Result<Vec<YearlySnapshot>> {
        params.validate()?;

        let mortgage = Mortgage::for_params(params);
        Ok(self
            .snapshots(params, mortgage.payment, &mortgage)
            .take(params.analysis_period_years as usize)
            .collect())
    }

    /// Year-end snapshots for years 1 through [`MAX_ANALYSIS_YEARS`]
    ///
    /// The renter invests against `mortgage_payment`; the outstanding
    /// balance comes from `balance`.
    fn snapshots<'a>(
        &self,
        params: &'a RentVsBuyParams,
        mortgage_payment: f64,
        balance: &'a Mortgage,
    ) -> impl Iterator<Item = YearlySnapshot> + 'a {
        let path = InvestmentPath::new(params, mortgage_payment);

        (1..=MAX_ANALYSIS_YEARS).zip(path).map(move |(year, investment_value)| {
            let property_value = property_value(params.price, params.appreciation_rate, year);
            let remaining_balance = balance.balance_after(year);
            YearlySnapshot {
                year,
                property_value,
                remaining_balance,
                net_worth_buying: property_value - remaining_balance,
                investment_value,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::params::tests::sample_params;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_analyze_sample() {
        let params = sample_params();
        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();

        let expected_payment = crate::loan::annuity_payment(1_200_000.0, 0.045 / 12.0, 300);
        assert_relative_eq!(result.monthly_mortgage_payment, expected_payment, max_relative = 1e-12);

        // 10 years of a 25 year loan
        assert_relative_eq!(
            result.total_cost_of_buying,
            300_000.0 + expected_payment * 120.0 + 150_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.property_value_at_end, 1_500_000.0 * 1.03f64.powi(10), max_relative = 1e-12);
        assert!(result.remaining_mortgage_balance > 0.0);
        assert!(result.remaining_mortgage_balance < 1_200_000.0);
        assert_relative_eq!(
            result.net_worth_after_buying,
            result.property_value_at_end - result.remaining_mortgage_balance,
            max_relative = 1e-12
        );

        assert_eq!(result.is_buying_better, result.net_worth_after_buying > result.net_worth_after_renting);
        assert_eq!(result.buying_advantage() > 0.0, result.is_buying_better);
    }

    #[test]
    fn test_rent_cost_excludes_deposit() {
        let mut params = sample_params();
        params.rent_increase_rate = 0.0;
        params.security_deposit = 1_000_000.0;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert_relative_eq!(result.total_cost_of_renting, 900_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_loan_paid_off_within_period() {
        let mut params = sample_params();
        params.loan_tenure_years = 5;
        params.analysis_period_years = 10;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();

        // Installments stop at the tenure
        assert_eq!(result.remaining_mortgage_balance, 0.0);
        assert_relative_eq!(
            result.total_cost_of_buying,
            300_000.0 + result.monthly_mortgage_payment * 60.0 + 150_000.0,
            max_relative = 1e-12
        );
        assert_eq!(result.net_worth_after_buying, result.property_value_at_end);
    }

    #[test]
    fn test_break_even_on_investment_rate_balance() {
        // Rent covers every month of owning and the portfolio earns nothing,
        // so the renter holds the 100k down payment throughout. At a 0%
        // investment rate the 900k balance falls linearly over 360 months:
        //   year 23: 1e6 * 0.95^23 - 900k * 7/30 = 97,357  (behind)
        //   year 24: 1e6 * 0.95^24 - 900k * 6/30 = 111,989 (ahead)
        // On the loan's own 4.5% / 25 year schedule buying would lead from
        // year 21 instead.
        let params = RentVsBuyParams {
            price: 1_000_000.0,
            down_payment: 100_000.0,
            interest_rate: 4.5,
            loan_tenure_years: 25,
            appreciation_rate: -5.0,
            maintenance_cost: 0.0,
            property_tax: 0.0,
            monthly_rent: 10_000.0,
            rent_increase_rate: 0.0,
            security_deposit: 0.0,
            investment_return_rate: 0.0,
            analysis_period_years: 10,
        };

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert_eq!(result.break_even_years, 24.0);
        assert_eq!(result.break_even_year(), Some(24));
        assert_eq!(result.net_worth_after_renting, 100_000.0);

        // Headline balance stays on the loan's own terms
        let expected_balance = crate::loan::remaining_balance(900_000.0, 0.045 / 12.0, 300, 120);
        assert_relative_eq!(result.remaining_mortgage_balance, expected_balance, max_relative = 1e-12);
    }

    #[test]
    fn test_short_loan_never_breaks_even() {
        // 6% over 10 years: on the 30 year investment-rate schedule the
        // balance stays too high for buying to catch the renter
        let mut params = sample_params();
        params.interest_rate = 6.0;
        params.loan_tenure_years = 10;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert!(result.break_even_years.is_infinite());
        assert_eq!(result.break_even_year(), None);
    }

    #[test]
    fn test_sample_breaks_even_in_first_year() {
        let mut params = sample_params();
        params.analysis_period_years = 30;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert_eq!(result.break_even_year(), Some(1));
    }

    #[test]
    fn test_no_break_even_is_infinite() {
        // Steep depreciation against a cheap rent and strong returns
        let mut params = sample_params();
        params.appreciation_rate = -20.0;
        params.monthly_rent = 1.0;
        params.investment_return_rate = 30.0;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert!(result.break_even_years.is_infinite());
        assert_eq!(result.break_even_year(), None);
        assert!(!result.is_buying_better);
    }

    #[test]
    fn test_immediate_break_even() {
        // Nothing to invest and rent costs more than owning
        let mut params = sample_params();
        params.down_payment = 0.0;
        params.appreciation_rate = 20.0;
        params.monthly_rent = 50_000.0;

        let result = RentVsBuyAnalyzer::new().analyze(&params).unwrap();
        assert_eq!(result.break_even_years, 1.0);
        assert_eq!(result.net_worth_after_renting, 0.0);
        assert!(result.is_buying_better);
    }

    #[test]
    fn test_projection_matches_final_year() {
        let analyzer = RentVsBuyAnalyzer::new();
        let params = sample_params();

        let result = analyzer.analyze(&params).unwrap();
        let projection = analyzer.yearly_projection(&params).unwrap();

        assert_eq!(projection.len(), 10);
        assert_eq!(projection.iter().map(|s| s.year).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());

        let last = projection[9];
        assert_eq!(last.property_value, result.property_value_at_end);
        assert_eq!(last.remaining_balance, result.remaining_mortgage_balance);
        assert_eq!(last.investment_value, result.net_worth_after_renting);
    }

    #[test]
    fn test_projection_property_value_monotonic() {
        let projection = RentVsBuyAnalyzer::new().yearly_projection(&sample_params()).unwrap();
        for pair in projection.windows(2) {
            assert!(pair[1].property_value > pair[0].property_value);
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_validation_precedes_work() {
        let mut params = sample_params();
        params.analysis_period_years = 31;

        let analyzer = RentVsBuyAnalyzer::new();
        assert_eq!(analyzer.analyze(&params).unwrap_err().field(), Some("analysis_period_years"));
        assert_eq!(analyzer.yearly_projection(&params).unwrap_err().field(), Some("analysis_period_years"));
    }

    #[test]
    fn test_idempotent() {
        let analyzer = RentVsBuyAnalyzer::new();
        let params = sample_params();
        assert_eq!(analyzer.analyze(&params).unwrap(), analyzer.analyze(&params).unwrap());
    }
}
