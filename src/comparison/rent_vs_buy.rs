//! Simplified rent-vs-buy comparison by net present value

use serde::{Deserialize, Serialize};

use super::{future_value, total_cost_of_ownership, MAX_HOLDING_YEARS};
use crate::error::{check, Result};

/// Longest break-even horizon searched, in years
pub const BREAK_EVEN_YEAR_CAP: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyComparison {
    pub price: f64,
    pub monthly_rent: f64,
    pub annual_rent_increase: f64,
    /// Investment return used as the discount rate
    pub discount_rate: f64,
    pub appreciation_rate: f64,
    pub holding_years: u32,

    pub buying_npv: f64,
    pub renting_npv: f64,
    /// Years until cumulative rent reaches the price net of appreciation,
    /// capped at [`BREAK_EVEN_YEAR_CAP`]
    pub break_even_years: u32,
    pub total_cost_of_ownership: f64,
}

impl RentVsBuyComparison {
    pub(super) fn compute(
        price: f64,
        monthly_rent: f64,
        annual_rent_increase: f64,
        discount_rate: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<Self> {
        check::positive("price", price)?;
        check::positive("monthly_rent", monthly_rent)?;
        check::non_negative("annual_rent_increase", annual_rent_increase)?;
        check::non_negative("discount_rate", discount_rate)?;
        check::non_negative("appreciation_rate", appreciation_rate)?;
        check::years("holding_years", holding_years, 1, MAX_HOLDING_YEARS)?;

        let buying_npv = buying_npv(price, appreciation_rate, discount_rate, holding_years);
        let renting_npv =
            renting_npv(price, monthly_rent, annual_rent_increase, discount_rate, holding_years);
        let break_even_years =
            break_even_years(price, monthly_rent, annual_rent_increase, appreciation_rate);

        log::debug!(
            "rent vs buy over {} years: buying npv {:.2}, renting npv {:.2}, break-even {}",
            holding_years,
            buying_npv,
            renting_npv,
            break_even_years
        );

        Ok(Self {
            price,
            monthly_rent,
            annual_rent_increase,
            discount_rate,
            appreciation_rate,
            holding_years,
            buying_npv,
            renting_npv,
            break_even_years,
            total_cost_of_ownership: total_cost_of_ownership(price),
        })
    }

    pub fn is_buying_better(&self) -> bool {
        self.buying_npv > self.renting_npv
    }
}

/// Discount factor for `years` whole years at `rate_percent`
fn discount_factor(rate_percent: f64, years: u32) -> f64 {
    1.0 / (1.0 + rate_percent / 100.0).powi(years as i32)
}

/// Pay the price today, receive the appreciated value at the end
fn buying_npv(price: f64, appreciation_rate: f64, discount_rate: f64, years: u32) -> f64 {
    -price + future_value(price, appreciation_rate, years) * discount_factor(discount_rate, years)
}

/// Discounted rent paid at each year end, offset by the gain on investing
/// the price instead of buying
fn renting_npv(
    price: f64,
    monthly_rent: f64,
    annual_rent_increase: f64,
    discount_rate: f64,
    years: u32,
) -> f64 {
    let rent_pv: f64 = (0..years)
        .map(|year| {
            let yearly_rent = monthly_rent * 12.0 * (1.0 + annual_rent_increase / 100.0).powi(year as i32);
            yearly_rent * discount_factor(discount_rate, year + 1)
        })
        .sum();

    -rent_pv + (future_value(price, discount_rate, years) - price)
}

/// First year in which cumulative rent reaches the price less appreciation
fn break_even_years(
    price: f64,
    monthly_rent: f64,
    annual_rent_increase: f64,
    appreciation_rate: f64,
) -> u32 {
    let yearly_rent = monthly_rent * 12.0;
    let mut year = 0;
    let mut total_rent = 0.0;
    let mut appreciation = 0.0;

    while total_rent < price - appreciation && year < BREAK_EVEN_YEAR_CAP {
        year += 1;
        total_rent += yearly_rent * (1.0 + annual_rent_increase / 100.0).powi(year as i32 - 1);
        appreciation = price * ((1.0 + appreciation_rate / 100.0).powi(year as i32) - 1.0);
    }

    year
}
