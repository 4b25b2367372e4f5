//! Property-vs-property and simplified rent-vs-buy comparisons
//!
//! Both comparisons work in whole years with annual compounding:
//! - **Property vs property**: appreciation-driven ROI and a coarse total
//!   cost of ownership for each side
//! - **Rent vs buy**: NPV of buying against NPV of renting, plus the year in
//!   which cumulative rent overtakes the price net of appreciation
//!
//! For the month-by-month net worth simulation see [`crate::analysis`].

mod property;
mod rent_vs_buy;

pub use property::PropertyComparison;
pub use rent_vs_buy::{RentVsBuyComparison, BREAK_EVEN_YEAR_CAP};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Multiplier applied to price as the total cost of ownership
///
/// Rough placeholder for closing costs, upkeep and fees over the holding
/// period.
pub const OWNERSHIP_COST_FACTOR: f64 = 1.3;

/// Longest holding period accepted by either comparison, in years
pub const MAX_HOLDING_YEARS: u32 = 100;

/// Outcome of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonResult {
    PropertyVsProperty(PropertyComparison),
    RentVsBuy(RentVsBuyComparison),
}

/// Value after `years` of annual compounding at `rate_percent`
pub fn future_value(price: f64, rate_percent: f64, years: u32) -> f64 {
    price * (1.0 + rate_percent / 100.0).powi(years as i32)
}

/// Percentage gain from `price` to its future value
pub fn roi(price: f64, rate_percent: f64, years: u32) -> f64 {
    (future_value(price, rate_percent, years) - price) / price * 100.0
}

pub fn total_cost_of_ownership(price: f64) -> f64 {
    price * OWNERSHIP_COST_FACTOR
}

/// Comparison calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare two purchase prices under the same appreciation assumption
    pub fn compare_properties(
        &self,
        price1: f64,
        price2: f64,
        appreciation_rate_percent: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        PropertyComparison::compute(price1, price2, appreciation_rate_percent, holding_years)
            .map(ComparisonResult::PropertyVsProperty)
    }

    /// Compare buying at `price` against renting at `monthly_rent`
    pub fn compare_rent_vs_buy(
        &self,
        price: f64,
        monthly_rent: f64,
        annual_rent_increase_percent: f64,
        discount_rate_percent: f64,
        appreciation_rate_percent: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        RentVsBuyComparison::compute(
            price,
            monthly_rent,
            annual_rent_increase_percent,
            discount_rate_percent,
            appreciation_rate_percent,
            holding_years,
        )
        .map(ComparisonResult::RentVsBuy)
    }
}
